//! Statement assembly and rendering.
//!
//! Pricing runs once per performance; the resulting line values feed both the
//! rendered line and the running totals, so the two cannot drift apart.

use theater_core::{DomainError, DomainResult};

use crate::currency::{CurrencyFormatter, IsoCurrency, scale_minor_units};
use crate::invoice::Invoice;
use crate::play::PlayCatalog;
use crate::pricing::PricingConfig;

/// One priced performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: u32,
    /// Minor currency units.
    pub amount: u64,
    pub credits: u64,
}

/// A fully priced invoice, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    customer: String,
    lines: Vec<StatementLine>,
    total_amount: u64,
    total_credits: u64,
    percent_factor: u64,
}

impl Statement {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Lines in invoice order.
    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_credits(&self) -> u64 {
        self.total_credits
    }

    /// Render as text, one newline-terminated line per entry.
    pub fn render(&self, formatter: &impl CurrencyFormatter) -> DomainResult<String> {
        let money = |amount: u64| -> DomainResult<String> {
            formatter.format(scale_minor_units(amount, self.percent_factor)?)
        };

        let mut out = format!("Statement for {}\n", self.customer);
        for line in &self.lines {
            out.push_str(&format!(
                "  {}: {} ({} seats)\n",
                line.play_name,
                money(line.amount)?,
                line.audience
            ));
        }
        out.push_str(&format!("Amount owed is {}\n", money(self.total_amount)?));
        out.push_str(&format!("You earned {} credits\n", self.total_credits));
        Ok(out)
    }
}

/// Prices invoices against a catalog with one fixed pricing configuration.
///
/// Holds no mutable state; one printer can serve many threads at once.
#[derive(Debug, Clone)]
pub struct StatementPrinter<F = IsoCurrency> {
    pricing: PricingConfig,
    formatter: F,
}

impl StatementPrinter<IsoCurrency> {
    /// Printer with U.S. dollar formatting.
    pub fn new(pricing: PricingConfig) -> DomainResult<Self> {
        Self::with_formatter(pricing, IsoCurrency::usd())
    }
}

impl<F: CurrencyFormatter> StatementPrinter<F> {
    /// Fails with `Validation` if any pricing constant is zero.
    pub fn with_formatter(pricing: PricingConfig, formatter: F) -> DomainResult<Self> {
        pricing.validate()?;
        Ok(Self { pricing, formatter })
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Price every performance in invoice order.
    ///
    /// Fails on the first performance whose play is missing or whose genre is
    /// unknown; no partial statement is returned.
    pub fn price(&self, invoice: &Invoice, catalog: &PlayCatalog) -> DomainResult<Statement> {
        let mut lines = Vec::with_capacity(invoice.performances().len());
        let mut total_amount: u64 = 0;
        let mut total_credits: u64 = 0;

        for performance in invoice.performances() {
            let play = catalog.resolve(&performance.play_id)?;
            let genre = play.genre()?;
            let amount = self.pricing.amount_for(genre, performance.audience)?;
            let credits = self.pricing.credits_for(genre, performance.audience);

            total_amount = total_amount
                .checked_add(amount)
                .ok_or_else(|| DomainError::invariant("statement total overflow"))?;
            total_credits = total_credits
                .checked_add(credits)
                .ok_or_else(|| DomainError::invariant("statement credits overflow"))?;

            lines.push(StatementLine {
                play_name: play.name().to_string(),
                audience: performance.audience,
                amount,
                credits,
            });
        }

        Ok(Statement {
            customer: invoice.customer().to_string(),
            lines,
            total_amount,
            total_credits,
            percent_factor: self.pricing.percent_factor,
        })
    }

    /// Price and render the statement text.
    pub fn statement(&self, invoice: &Invoice, catalog: &PlayCatalog) -> DomainResult<String> {
        self.price(invoice, catalog)?.render(&self.formatter)
    }
}

/// Render a U.S. dollar statement for `invoice` using `pricing`.
pub fn generate_statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    pricing: &PricingConfig,
) -> DomainResult<String> {
    StatementPrinter::new(pricing.clone())?.statement(invoice, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::MajorAmount;
    use crate::invoice::Performance;
    use crate::play::{Genre, Play};
    use theater_core::PlayId;

    fn id(s: &str) -> PlayId {
        PlayId::new(s).unwrap()
    }

    fn test_catalog() -> PlayCatalog {
        PlayCatalog::try_from_plays([
            Play::with_genre(id("hamlet"), "Hamlet", Genre::Tragedy),
            Play::with_genre(id("as-like"), "As You Like It", Genre::Comedy),
            Play::with_genre(id("othello"), "Othello", Genre::Tragedy),
            Play::new(id("henry-v"), "Henry V", "history"),
        ])
        .unwrap()
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new(id("hamlet"), 55),
                Performance::new(id("as-like"), 35),
                Performance::new(id("othello"), 40),
            ],
        )
    }

    #[test]
    fn renders_reference_statement() {
        let text =
            generate_statement(&big_co(), &test_catalog(), &PricingConfig::default()).unwrap();

        assert_eq!(
            text,
            "Statement for BigCo\n\
             \x20 Hamlet: $650.00 (55 seats)\n\
             \x20 As You Like It: $580.00 (35 seats)\n\
             \x20 Othello: $500.00 (40 seats)\n\
             Amount owed is $1,730.00\n\
             You earned 47 credits\n"
        );
    }

    #[test]
    fn totals_equal_sum_of_lines() {
        let printer = StatementPrinter::new(PricingConfig::default()).unwrap();
        let statement = printer.price(&big_co(), &test_catalog()).unwrap();

        let amounts: u64 = statement.lines().iter().map(|l| l.amount).sum();
        let credits: u64 = statement.lines().iter().map(|l| l.credits).sum();
        assert_eq!(statement.total_amount(), amounts);
        assert_eq!(statement.total_credits(), credits);
        assert_eq!(statement.customer(), "BigCo");
    }

    #[test]
    fn lines_follow_invoice_order() {
        let invoice = Invoice::new(
            "Acme",
            vec![
                Performance::new(id("othello"), 10),
                Performance::new(id("as-like"), 10),
                Performance::new(id("othello"), 31),
            ],
        );
        let statement = StatementPrinter::new(PricingConfig::default())
            .unwrap()
            .price(&invoice, &test_catalog())
            .unwrap();

        let names: Vec<_> = statement.lines().iter().map(|l| l.play_name.as_str()).collect();
        assert_eq!(names, ["Othello", "As You Like It", "Othello"]);
        assert_eq!(statement.lines()[2].amount, 41_000);
    }

    #[test]
    fn empty_invoice_renders_zero_totals() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let text = generate_statement(&invoice, &test_catalog(), &PricingConfig::default()).unwrap();
        assert_eq!(
            text,
            "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
    }

    #[test]
    fn unknown_genre_aborts_whole_statement() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new(id("hamlet"), 55),
                Performance::new(id("henry-v"), 20),
            ],
        );
        let err = generate_statement(&invoice, &test_catalog(), &PricingConfig::default())
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownGenre("history".to_string()));
    }

    #[test]
    fn missing_play_aborts_whole_statement() {
        let invoice = Invoice::new("BigCo", vec![Performance::new(id("macbeth"), 10)]);
        let err = generate_statement(&invoice, &test_catalog(), &PricingConfig::default())
            .unwrap_err();
        assert_eq!(err, DomainError::MissingPlay(id("macbeth")));
    }

    #[test]
    fn invalid_pricing_is_rejected_before_pricing() {
        let pricing = PricingConfig {
            percent_factor: 0,
            ..PricingConfig::default()
        };
        assert!(matches!(
            StatementPrinter::new(pricing),
            Err(DomainError::Validation(_))
        ));
    }

    struct Plain;

    impl CurrencyFormatter for Plain {
        fn format(&self, amount: MajorAmount) -> DomainResult<String> {
            Ok(format!("{}.{:02}", amount.units, amount.hundredths))
        }
    }

    #[test]
    fn formatter_and_scale_are_pluggable() {
        let pricing = PricingConfig {
            percent_factor: 1_000,
            ..PricingConfig::default()
        };
        let invoice = Invoice::new("Acme", vec![Performance::new(id("hamlet"), 55)]);

        let plain = StatementPrinter::with_formatter(pricing.clone(), Plain).unwrap();
        let text = plain.statement(&invoice, &test_catalog()).unwrap();
        assert!(text.contains("  Hamlet: 65.00 (55 seats)\n"));

        let gbp = IsoCurrency::from_code("GBP").unwrap();
        let text = StatementPrinter::with_formatter(pricing, gbp)
            .unwrap()
            .statement(&invoice, &test_catalog())
            .unwrap();
        assert!(text.contains("Amount owed is £65.00\n"));
    }
}
