//! Command-line argument types.

use clap::Parser;

/// Console slot machine.
///
/// Deposit funds, pick how many pay-lines to play and how much to bet per
/// line, then spin. A line pays when every symbol on it matches.
#[derive(Debug, Parser)]
#[command(name = "slotline", version)]
pub struct SlotlineCli {
    /// Seed for a reproducible session (overrides SLOTLINE_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}
