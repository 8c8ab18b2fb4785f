//! Currency display: scaling minor units and locale formatting.
//!
//! The two steps are separate so pricing never depends on a locale, and a
//! locale never needs to know the minor-unit scale.

use rusty_money::{Money, iso};

use theater_core::{DomainError, DomainResult, ValueObject};

/// An amount in major currency units, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MajorAmount {
    pub units: u64,
    /// 0..=99
    pub hundredths: u8,
}

impl ValueObject for MajorAmount {}

impl MajorAmount {
    fn total_hundredths(self) -> u128 {
        u128::from(self.units) * 100 + u128::from(self.hundredths)
    }
}

/// Divide a minor-unit amount by `percent_factor`, rounding half up to two
/// decimals. Integer-only: no floating point is involved.
pub fn scale_minor_units(amount: u64, percent_factor: u64) -> DomainResult<MajorAmount> {
    if percent_factor == 0 {
        return Err(DomainError::validation("percent_factor must be positive"));
    }
    let factor = u128::from(percent_factor);
    let total_hundredths = (u128::from(amount) * 100 + factor / 2) / factor;
    let units = u64::try_from(total_hundredths / 100)
        .map_err(|_| DomainError::invariant("scaled amount overflow"))?;
    Ok(MajorAmount {
        units,
        hundredths: (total_hundredths % 100) as u8,
    })
}

/// Formats a major-unit amount for display.
pub trait CurrencyFormatter {
    fn format(&self, amount: MajorAmount) -> DomainResult<String>;
}

/// ISO 4217 currency rendered with its own locale conventions
/// (symbol placement, digit grouping, decimal separator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCurrency {
    currency: &'static iso::Currency,
}

impl IsoCurrency {
    pub fn new(currency: &'static iso::Currency) -> Self {
        Self { currency }
    }

    /// U.S. dollars: `$1,234.50`.
    pub fn usd() -> Self {
        Self::new(iso::USD)
    }

    /// Look up a currency by ISO alpha code (e.g. `"GBP"`).
    pub fn from_code(code: &str) -> DomainResult<Self> {
        iso::find(code)
            .map(Self::new)
            .ok_or_else(|| DomainError::validation(format!("unknown currency code: {code}")))
    }

    pub fn code(&self) -> &'static str {
        self.currency.iso_alpha_code
    }

    /// Re-express a two-decimal amount in this currency's minor units.
    fn to_minor(&self, amount: MajorAmount) -> DomainResult<i64> {
        let hundredths = amount.total_hundredths();
        let exponent = self.currency.exponent;
        let minor = if exponent >= 2 {
            10u128
                .checked_pow(exponent - 2)
                .and_then(|scale| hundredths.checked_mul(scale))
        } else {
            let divisor = 10u128.pow(2 - exponent);
            Some((hundredths + divisor / 2) / divisor)
        };
        minor
            .and_then(|minor| i64::try_from(minor).ok())
            .ok_or_else(|| DomainError::invariant("display amount overflow"))
    }
}

impl Default for IsoCurrency {
    fn default() -> Self {
        Self::usd()
    }
}

impl CurrencyFormatter for IsoCurrency {
    fn format(&self, amount: MajorAmount) -> DomainResult<String> {
        let minor = self.to_minor(amount)?;
        Ok(Money::from_minor(minor, self.currency).to_string())
    }
}
