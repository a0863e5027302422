//! Prompt-validate-retry loops.
//!
//! Each loop writes its prompt, reads one line, and validates it with the
//! matching function from [`crate::validation`]. A rejected answer prints a
//! fixed diagnostic and the prompt repeats, with no retry limit. Only closing
//! the input ends a loop without a value.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ValidationError, is_play_again, parse_bet, parse_deposit, parse_lines};

pub const DEPOSIT_PROMPT: &str = "Enter a deposit amount: ";
pub const BET_PROMPT: &str = "Enter your bet amount per line : ";
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again(y/n)? ";

pub const INVALID_DEPOSIT: &str = "Invalid deposit, Try again!";
pub const INVALID_LINES: &str = "Invalid number of lines, Try again!";
pub const INVALID_BET: &str = "Invalid bet, Try again!";

pub fn lines_prompt(max_lines: usize) -> String {
    format!("Enter number of lines to bet between 1 and {} : ", max_lines)
}

fn ask(input: &mut dyn BufRead, out: &mut dyn Write, prompt: &str) -> Result<String, CliError> {
    ui::write_prompt(out, prompt)?;
    read_stdin_line(input).ok_or_else(|| CliError::Interrupted("input closed".to_string()))
}

fn retry<T>(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
    diagnostic: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T, CliError> {
    loop {
        let answer = ask(input, out, prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                debug!(answer = %answer, %reason, "rejected input");
                writeln!(out, "{}", diagnostic)?;
            }
        }
    }
}

/// Ask for the session deposit until a positive amount is entered.
pub fn prompt_deposit(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<f64, CliError> {
    retry(input, out, DEPOSIT_PROMPT, INVALID_DEPOSIT, parse_deposit)
}

/// Ask for the number of pay-lines until a whole number in `1..=max_lines` is entered.
pub fn prompt_lines(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    max_lines: usize,
) -> Result<usize, CliError> {
    let prompt = lines_prompt(max_lines);
    retry(input, out, &prompt, INVALID_LINES, |s| {
        parse_lines(s, max_lines)
    })
}

/// Ask for the bet per line until it is positive and covered by `balance` over `lines` lines.
pub fn prompt_bet(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    balance: f64,
    lines: usize,
) -> Result<f64, CliError> {
    retry(input, out, BET_PROMPT, INVALID_BET, |s| {
        parse_bet(s, balance, lines)
    })
}

/// Ask whether to play another round. Anything but `y`, including a closed
/// input, means no.
pub fn prompt_play_again(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool, CliError> {
    ui::write_prompt(out, PLAY_AGAIN_PROMPT)?;
    Ok(read_stdin_line(input).is_some_and(|answer| is_play_again(&answer)))
}
