//! Command-line wrapper around the statement generator.
//!
//! Loads an invoice, a play catalog and optional pricing rates from JSON
//! files, then writes the rendered statement.

pub mod args;
pub mod loader;

use std::io::Write;

use anyhow::Context;

use theater_billing::StatementPrinter;

pub use args::Args;
pub use loader::{LoadError, load_catalog, load_invoice, load_pricing};

/// Load inputs named by `args` and write the statement to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let invoice = load_invoice(&args.invoice)?;
    let catalog = load_catalog(&args.plays)?;
    let pricing = match &args.pricing {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using pricing file");
            load_pricing(path)?
        }
        None => {
            tracing::debug!("using default pricing");
            Default::default()
        }
    };

    tracing::info!(
        customer = invoice.customer(),
        performances = invoice.performances().len(),
        plays = catalog.len(),
        "generating statement"
    );

    let printer = StatementPrinter::new(pricing).context("invalid pricing configuration")?;
    let statement = printer
        .statement(&invoice, &catalog)
        .with_context(|| format!("cannot generate statement for {}", invoice.customer()))?;

    out.write_all(statement.as_bytes())
        .context("failed to write statement")?;
    Ok(())
}
