//! Error types for the CLI application.
//!
//! Invalid answers at a prompt are not errors: the prompt loops recover them
//! locally. What reaches `CliError` is everything that ends the session
//! early.

use slotline_engine::errors::SlotError;
use thiserror::Error;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error on stdout/stderr writes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid environment or command-line configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine rejected a value that should already have been validated
    #[error("Engine error: {0}")]
    Engine(#[from] SlotError),

    /// Input closed while a prompt was waiting for an answer
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => 130,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_maps_to_130() {
        assert_eq!(CliError::Interrupted("eof".into()).exit_code(), 130);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 2);
    }

    #[test]
    fn engine_errors_convert() {
        let e: CliError = SlotError::InvalidBet(-1.0).into();
        assert_eq!(e.to_string(), "Engine error: Invalid bet amount: -1");
    }
}
