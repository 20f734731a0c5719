//! Text-field parsing for calculators and exercise answers.
//!
//! Both the comma and the dot are accepted as decimal separator, so "2,5"
//! and "2.5" parse to the same number.

use super::{CalculatorKind, CalculatorResult, INSUFFICIENT_DATA};

/// Failure message for an empty or non-numeric field
pub const FILL_IN_ALL_FIELDS: &str = "Fill in all fields";

/// Parse one number typed by the user.
///
/// Returns `None` for empty or malformed text, and for "inf"/"NaN" which
/// are not valid user input.
///
/// ```rust
/// use study_core::calculators::parse_number;
///
/// assert_eq!(parse_number(" 2,5 "), Some(2.5));
/// assert_eq!(parse_number("-3"), Some(-3.0));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Convert raw field text into the positional values for `kind`.
///
/// On failure the returned `CalculatorResult` is ready to show to the user.
pub fn parse_inputs(kind: CalculatorKind, fields: &[&str]) -> Result<Vec<f64>, CalculatorResult> {
    if fields.len() != kind.definition().arity() {
        return Err(CalculatorResult::failure(INSUFFICIENT_DATA));
    }
    fields
        .iter()
        .map(|field| parse_number(field).ok_or_else(|| CalculatorResult::failure(FILL_IN_ALL_FIELDS)))
        .collect()
}
