//! Input parsing and validation for the game prompts.
//!
//! Each function takes one line of user input and either returns the parsed
//! value or a [`ValidationError`]. The prompt loops in [`crate::prompt`] turn
//! an error into a diagnostic line and ask again.
//!
//! Numbers are read from the longest numeric prefix of the answer, so
//! `10abc` and `100 dollars` both read as numbers while `abc` does not.
//! Values that overflow to infinity are never valid amounts and count as
//! not-a-number.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a number")]
    NotANumber,
    #[error("out of range")]
    OutOfRange,
    #[error("not a whole number")]
    NotAnInteger,
}

/// Byte length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run,
/// or `None` when `s` does not start with a number.
fn numeric_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exp = end + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(end)
}

/// Parse a finite number from the start of `input`, ignoring leading
/// whitespace and anything after the number.
///
/// # Example
///
/// ```rust
/// # use slotline_cli::validation::{parse_amount, ValidationError};
/// assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
/// assert_eq!(parse_amount("10abc"), Ok(10.0));
/// assert_eq!(parse_amount("abc"), Err(ValidationError::NotANumber));
/// assert_eq!(parse_amount("NaN"), Err(ValidationError::NotANumber));
/// ```
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let text = input.trim_start();
    let len = numeric_prefix_len(text).ok_or(ValidationError::NotANumber)?;
    match text[..len].parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotANumber),
    }
}

/// Deposit must be strictly positive. There is no upper bound.
pub fn parse_deposit(input: &str) -> Result<f64, ValidationError> {
    let amount = parse_amount(input)?;
    if amount <= 0.0 {
        return Err(ValidationError::OutOfRange);
    }
    Ok(amount)
}

/// Number of pay-lines: a whole number in `1..=max_lines`.
///
/// # Example
///
/// ```rust
/// # use slotline_cli::validation::{parse_lines, ValidationError};
/// assert_eq!(parse_lines("3", 3), Ok(3));
/// assert_eq!(parse_lines("4", 3), Err(ValidationError::OutOfRange));
/// assert_eq!(parse_lines("2.5", 3), Err(ValidationError::NotAnInteger));
/// ```
pub fn parse_lines(input: &str, max_lines: usize) -> Result<usize, ValidationError> {
    let value = parse_amount(input)?;
    if value < 1.0 || value > max_lines as f64 {
        return Err(ValidationError::OutOfRange);
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger);
    }
    Ok(value as usize)
}

/// Bet per line: strictly positive and at most `balance / lines`, so the
/// total stake never exceeds the balance.
pub fn parse_bet(input: &str, balance: f64, lines: usize) -> Result<f64, ValidationError> {
    let bet = parse_amount(input)?;
    if bet <= 0.0 || lines == 0 || bet > balance / lines as f64 {
        return Err(ValidationError::OutOfRange);
    }
    Ok(bet)
}

/// Only a literal `y` continues the session.
pub fn is_play_again(input: &str) -> bool {
    input == "y"
}
