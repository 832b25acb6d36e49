use num_bigint::{BigInt, Sign};

use crate::error::{InvalidInputSnafu, Result};

/// The quantity to format: a finite real number, or an
/// arbitrary-precision integer whose magnitude may exceed 2^53.
///
/// The two kinds never coerce into each other; each carries its own
/// sign extraction, logarithm, and division logic.
#[derive(Clone, Debug, PartialEq)]
pub enum ByteValue {
    Float(f64),
    BigInt(BigInt),
}

impl ByteValue {
    /// Non-finite reals are rejected before any formatting work begins.
    /// Big integers are finite by construction.
    pub(crate) fn ensure_finite(&self) -> Result<()> {
        match self {
            ByteValue::Float(f) if !f.is_finite() => InvalidInputSnafu { value: *f }.fail(),
            _ => Ok(()),
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            ByteValue::Float(f) => *f == 0.0,
            ByteValue::BigInt(b) => b.sign() == Sign::NoSign,
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        match self {
            ByteValue::Float(f) => *f < 0.0,
            ByteValue::BigInt(b) => b.sign() == Sign::Minus,
        }
    }

    pub(crate) fn abs(&self) -> ByteValue {
        match self {
            ByteValue::Float(f) => ByteValue::Float(f.abs()),
            ByteValue::BigInt(b) => {
                if b.sign() == Sign::Minus {
                    ByteValue::BigInt(-b)
                } else {
                    ByteValue::BigInt(b.clone())
                }
            }
        }
    }

    pub(crate) fn less_than_one(&self) -> bool {
        match self {
            ByteValue::Float(f) => *f < 1.0,
            ByteValue::BigInt(b) => *b < BigInt::from(1),
        }
    }

    /// Base-10 logarithm of a non-negative value. A big integer is never
    /// converted to `f64` wholesale (that loses precision past 2^53);
    /// instead: digit count plus the log of the leading 15 digits.
    pub(crate) fn log10(&self) -> f64 {
        match self {
            ByteValue::Float(f) => f.log10(),
            ByteValue::BigInt(b) => {
                let digits = b.to_string();
                let head: String = digits.chars().take(15).collect();
                let fraction: f64 = format!("0.{head}").parse().unwrap_or(0.0);
                digits.len() as f64 + fraction.log10()
            }
        }
    }

    pub(crate) fn ln(&self) -> f64 {
        match self {
            ByteValue::Float(f) => f.ln(),
            ByteValue::BigInt(_) => self.log10() * std::f64::consts::LN_10,
        }
    }

    /// Divide a non-negative value by `divisor`, keeping the fractional
    /// remainder. Big-integer division captures the remainder before the
    /// integral part is taken, so `10^30 / 1024^8` keeps its fraction.
    pub(crate) fn divide(&self, divisor: f64) -> f64 {
        match self {
            ByteValue::Float(f) => f / divisor,
            ByteValue::BigInt(b) => {
                let divisor_int = BigInt::from(divisor as u128);
                let integer_part = b / &divisor_int;
                let remainder = b % &divisor_int;
                big_to_f64(&integer_part) + big_to_f64(&remainder) / divisor
            }
        }
    }
}

/// Nearest `f64` via the decimal representation, like `Number(bigint)`.
pub(crate) fn big_to_f64(b: &BigInt) -> f64 {
    let s = b.to_string();
    s.parse::<f64>().unwrap_or(if s.starts_with('-') {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

impl From<f64> for ByteValue {
    fn from(value: f64) -> Self {
        ByteValue::Float(value)
    }
}

impl From<BigInt> for ByteValue {
    fn from(value: BigInt) -> Self {
        ByteValue::BigInt(value)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ByteValue {
            fn from(value: $ty) -> Self {
                ByteValue::BigInt(BigInt::from(value))
            }
        })*
    };
}

from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
