//! # Slotline CLI Library
//!
//! Console front end for the slotline slot machine engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, resolves configuration, and plays
//! one session on stdin/stdout. [`run_with_input`] does the same with an
//! injected input stream, which is how the tests drive whole sessions.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new("100\n3\n5\nn\n");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = slotline_cli::run_with_input(
//!     ["slotline", "--seed", "7"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Final Balance $"));
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: session finished, or `--help` / `--version` / `--show-config`
//! - `2`: invalid arguments or configuration
//! - `130`: input closed while a prompt was waiting

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::info;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod prompt;
pub mod ui;
pub mod validation;

use cli::SlotlineCli;
use commands::{handle_cfg_command, handle_play_command};
use slotline_engine::machine::SlotMachine;

pub use error::CliError;

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for the game transcript (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes mid-prompt
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading the player's answers from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SlotlineCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    2
                }
            };
        }
    };

    match execute(cli, input, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}

fn execute(cli: SlotlineCli, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), CliError> {
    let resolved =
        config::load_with_sources(cli.seed).map_err(|e| CliError::Config(e.to_string()))?;

    if cli.show_config {
        return handle_cfg_command(&resolved, out);
    }

    let seed = resolved.config.seed.unwrap_or_else(rand::random);
    info!(seed, source = ?resolved.sources.seed, "seeding reels");

    let mut machine = SlotMachine::classic(seed);
    handle_play_command(&mut machine, input, out)?;
    Ok(())
}
