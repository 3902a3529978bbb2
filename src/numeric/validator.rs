// ============================================================================
// Decimal Validator
// Turns raw numbers into exact decimals through their canonical string form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::number::Number;
use rust_decimal::Decimal;

/// Validate a raw value and convert it into an exact decimal.
///
/// The value is rendered to its canonical string first and the decimal is
/// parsed from that string, so the result always matches what would be
/// printed for the input. Parsing is exact: a finite value whose digits do
/// not fit the decimal's 96-bit mantissa or 28-digit scale is rejected rather
/// than rounded.
///
/// # Errors
/// - `InvalidNumericValue` for `NaN`, `Infinity` and `-Infinity`
/// - `Unrepresentable` if the digits cannot be held exactly
///
/// # Example
/// ```
/// use tree_aggregator::numeric::validate_and_convert;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_and_convert(0.1f64).unwrap(), Decimal::new(1, 1));
/// assert!(validate_and_convert(f64::NAN).is_err());
/// ```
pub fn validate_and_convert(value: impl Into<Number>) -> NumericResult<Decimal> {
    let rendered = value.into().to_string();
    validate_rendered(&rendered)?;

    Decimal::from_str_exact(&rendered).map_err(|e| NumericError::Unrepresentable {
        reason: e.to_string(),
        rendered,
    })
}

/// Reject canonical strings that denote a non-finite value.
pub fn validate_rendered(rendered: &str) -> NumericResult<()> {
    if rendered == "NaN" || rendered.contains("Infinity") {
        return Err(NumericError::InvalidNumericValue(rendered.to_string()));
    }
    Ok(())
}
