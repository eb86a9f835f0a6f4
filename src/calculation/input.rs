//! Input-edge parsing.
//!
//! Hourly rates and percentages arrive as text from the form layer. Both are
//! parsed here and nowhere else; anything that does not parse reads as zero
//! instead of raising an error.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

/// Parses a decimal amount, returning `None` if the text is not a number.
///
/// Surrounding whitespace is ignored. Empty text is not a number.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::try_parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(try_parse_amount(" 12.5 "), Some(Decimal::new(125, 1)));
/// assert_eq!(try_parse_amount("abc"), None);
/// assert_eq!(try_parse_amount(""), None);
/// ```
pub fn try_parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parses a non-negative monetary amount such as an hourly rate.
///
/// Empty or non-numeric text reads as zero, and so does a negative amount.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("250"), Decimal::from(250));
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("n/a"), Decimal::ZERO);
/// assert_eq!(parse_amount("-5"), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    match try_parse_amount(text) {
        Some(amount) if amount.is_sign_negative() && !amount.is_zero() => {
            warn!(input = %text, "Negative amount read as zero");
            Decimal::ZERO
        }
        Some(amount) => amount,
        None => {
            if !text.trim().is_empty() {
                warn!(input = %text, "Unparseable amount read as zero");
            }
            Decimal::ZERO
        }
    }
}

/// Parses a budget percentage.
///
/// Empty or non-numeric text reads as zero. No range check is applied; the
/// only validity rule for percentages is that a budget sums to 100.
pub fn parse_percentage(text: &str) -> Decimal {
    try_parse_amount(text).unwrap_or(Decimal::ZERO)
}
