// ============================================================================
// Raw Number
// Untyped numeric input as stored on a node, with its canonical string form
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw numeric parameter value.
///
/// Values are kept in their source width until they are validated, so the
/// canonical string of an `f32` is the `f32`'s own shortest form (`0.1`),
/// not the widened `f64` expansion (`0.10000000149011612`).
///
/// # Canonical form
/// - `Integer`, `Decimal`: natural decimal notation
/// - `Single`, `Double`: shortest round-trip notation, never exponent form
/// - non-finite floats: `NaN`, `Infinity`, `-Infinity`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Integer(i64),
    Double(f64),
    Single(f32),
    Decimal(Decimal),
}

fn fmt_float<F>(f: &mut fmt::Formatter<'_>, value: F, is_nan: bool, is_inf: bool, negative: bool) -> fmt::Result
where
    F: fmt::Display,
{
    if is_nan {
        f.write_str("NaN")
    } else if is_inf {
        f.write_str(if negative { "-Infinity" } else { "Infinity" })
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Decimal(v) => write!(f, "{}", v),
            Number::Single(v) => {
                fmt_float(f, v, v.is_nan(), v.is_infinite(), v.is_sign_negative())
            },
            Number::Double(v) => {
                fmt_float(f, v, v.is_nan(), v.is_infinite(), v.is_sign_negative())
            },
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Unsigned values past i64::MAX are kept losslessly as decimals
macro_rules! impl_from_wide_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    i64::try_from(value)
                        .map(Number::Integer)
                        .unwrap_or_else(|_| Number::Decimal(Decimal::from(value)))
                }
            }
        )*
    };
}

impl_from_wide_unsigned!(u64, usize);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Single(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

impl From<Decimal> for Number {
    #[inline]
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}
