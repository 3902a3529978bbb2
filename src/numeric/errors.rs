// ============================================================================
// Numeric Errors
// Error types for validating raw values into exact decimals
// ============================================================================

use thiserror::Error;

/// Errors that can occur while turning a raw [`Number`](super::Number) into an
/// exact decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The canonical form is `NaN`, `Infinity` or `-Infinity`
    #[error("invalid numeric value `{0}`: not a finite number")]
    InvalidNumericValue(String),

    /// Finite, but the decimal type cannot hold it without losing digits
    #[error("numeric value `{rendered}` cannot be represented exactly: {reason}")]
    Unrepresentable { rendered: String, reason: String },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
