// ============================================================================
// Rational Conversions
// Integer and rust_decimal widenings, truncating narrowings
// ============================================================================

use super::errors::{RationalError, RationalResult};
use super::rational::Rational;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed-point scale used when widening a `Decimal` (nine fractional digits).
pub const DECIMAL_SCALE: i64 = 1_000_000_000;

const DECIMAL_SCALE_DIGITS: u32 = 9;

impl Rational {
    // ========================================================================
    // Widening
    // ========================================================================

    /// Widen a `Decimal` at nano precision.
    ///
    /// Digits past the ninth fractional place are truncated toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if `value × 10^9` does not fit in i64.
    pub fn from_decimal(value: Decimal) -> RationalResult<Self> {
        let truncated =
            value.round_dp_with_strategy(DECIMAL_SCALE_DIGITS, RoundingStrategy::ToZero);
        if truncated != value {
            tracing::debug!(
                "decimal {} truncated to {} when widening to rational",
                value,
                truncated
            );
        }

        let raw = truncated
            .checked_mul(Decimal::from(DECIMAL_SCALE))
            .and_then(|scaled| scaled.to_i64())
            .ok_or(RationalError::Overflow)?;

        Self::new(raw, DECIMAL_SCALE)
    }

    /// Convert a `Decimal` exactly, as `mantissa / 10^scale`.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced fraction does not fit in i64.
    pub fn from_decimal_exact(value: Decimal) -> RationalResult<Self> {
        // scale <= 28, and 10^28 fits comfortably in i128
        Self::from_wide(value.mantissa(), 10i128.pow(value.scale()))
    }

    // ========================================================================
    // Narrowing
    // ========================================================================

    /// Exact quotient as a `Decimal`, rounded at its 28-digit precision.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.numerator()) / Decimal::from(self.denominator())
    }

    /// Integer value, truncated toward zero.
    #[inline]
    pub const fn to_integer(self) -> i64 {
        self.integer_part()
    }

    /// Nearest `f64`. Lossy.
    pub fn to_f64(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

macro_rules! from_integer_types {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer_types!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Rational {
    type Error = RationalError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::from_integer)
            .map_err(|_| RationalError::Overflow)
    }
}

impl TryFrom<Decimal> for Rational {
    type Error = RationalError;

    /// Same as [`Rational::from_decimal`].
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Rational> for Decimal {
    fn from(value: Rational) -> Self {
        value.to_decimal()
    }
}

impl From<Rational> for i64 {
    fn from(value: Rational) -> Self {
        value.to_integer()
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}
