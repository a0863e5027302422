//! Command handler modules for the slotline CLI.
//!
//! Each handler follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<_, CliError>`
//! - Dependency injection: input (`&mut dyn BufRead`) and output (`&mut dyn Write`)
//!   streams are passed as parameters
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::{OUT_OF_MONEY, SessionSummary, handle_play_command};
