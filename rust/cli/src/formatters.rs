//! Message formatting for the game transcript.
//!
//! Amounts use the shortest round-trip digits, so whole amounts print
//! without a fraction (`140`) and others keep only the digits they need
//! (`16.5`). Magnitudes below `1e-6` or from `1e21` up switch to exponent
//! form with a signed exponent (`-8.881784197001252e-16`, `1e+21`).

const EXP_BELOW: f64 = 1e-6;
const EXP_FROM: f64 = 1e21;

/// Format a money amount for display. Negative zero prints as `0`.
///
/// # Example
///
/// ```rust
/// # use slotline_cli::formatters::format_amount;
/// assert_eq!(format_amount(140.0), "140");
/// assert_eq!(format_amount(16.5), "16.5");
/// assert_eq!(format_amount(-0.0), "0");
/// assert_eq!(format_amount(1e21), "1e+21");
/// ```
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount == 0.0 {
        return "0".to_string();
    }

    let magnitude = amount.abs();
    if magnitude >= EXP_BELOW && magnitude < EXP_FROM {
        return amount.to_string();
    }

    let exp = format!("{:e}", amount);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

pub fn balance_line(balance: f64) -> String {
    format!("Current Balance ${}", format_amount(balance))
}

pub fn winnings_line(winnings: f64) -> String {
    format!("You won, ${}", format_amount(winnings))
}

pub fn final_balance_line(balance: f64) -> String {
    format!("Final Balance ${}", format_amount(balance))
}
