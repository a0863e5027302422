//! Configuration display.
//!
//! `slotline --show-config` prints the resolved configuration with the source
//! of each value (default, environment, or command line) as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   }
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Write the resolved configuration as pretty JSON.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
