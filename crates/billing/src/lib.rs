//! Theater billing domain module.
//!
//! Prices performances by play genre and audience size and assembles customer
//! statements, implemented purely as deterministic domain logic (no IO, no
//! locale lookups, no storage).

pub mod currency;
pub mod invoice;
pub mod play;
pub mod pricing;
pub mod statement;

pub use currency::{CurrencyFormatter, IsoCurrency, MajorAmount, scale_minor_units};
pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play, PlayCatalog};
pub use pricing::{PricingConfig, compute_amount, compute_credits};
pub use statement::{Statement, StatementLine, StatementPrinter, generate_statement};
