// ============================================================================
// Numeric Module
// Raw parameter values and their validation into exact decimals
// ============================================================================
//
// This module provides:
// - Number: raw integer/float/decimal input with a canonical string form
// - validate_and_convert: NaN/Infinity rejection and exact decimal parsing
// - NumericError: Error types for validation
//
// Design principles:
// - No floating-point arithmetic after validation
// - The decimal always equals the printed form of the input
// - All conversions return Result (no panics)

mod errors;
mod number;
mod validator;

pub use errors::{NumericError, NumericResult};
pub use number::Number;
pub use validator::{validate_and_convert, validate_rendered};
