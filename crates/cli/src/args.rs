use std::path::PathBuf;

use clap::Parser;

/// Print a billing statement for a theater invoice.
#[derive(Debug, Clone, Parser)]
#[command(name = "theater-statement", version)]
pub struct Args {
    /// Invoice JSON: {"customer": .., "performances": [{"playId": .., "audience": ..}]}
    #[arg(long)]
    pub invoice: PathBuf,

    /// Play catalog JSON: {"<playId>": {"name": .., "type": "tragedy" | "comedy"}}
    #[arg(long)]
    pub plays: PathBuf,

    /// Pricing rates JSON; omitted fields use the standard rates.
    #[arg(long, env = "THEATER_PRICING_CONFIG")]
    pub pricing: Option<PathBuf>,
}
