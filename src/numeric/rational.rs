// ============================================================================
// Rational Number
// Exact fractions over i64 with a canonical reduced representation
// ============================================================================

use super::errors::{RationalError, RationalResult};
use super::math::{gcd, lcm};
use crate::codec;
use crate::domain::config::{FormatConfig, FormatTag};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Exact rational number `numerator / denominator`.
///
/// Every constructed value is kept in canonical form:
/// - the denominator is strictly positive (the sign lives in the numerator)
/// - numerator and denominator are coprime
/// - zero is always stored as `0/1`
///
/// Because the form is unique, equality and hashing are structural.
///
/// # Example
/// ```
/// use exact_rational::numeric::Rational;
///
/// let half = Rational::new(4, 8)?;
/// assert_eq!((half.numerator(), half.denominator()), (1, 2));
///
/// let sum = half.checked_add(Rational::new(1, 3)?)?;
/// assert_eq!(sum, Rational::new(5, 6)?);
/// # Ok::<(), exact_rational::numeric::RationalError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_integer(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_integer(1);

    /// Largest representable value
    pub const MAX: Self = Self::from_integer(i64::MAX);

    /// Smallest representable value
    pub const MIN: Self = Self::from_integer(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a reduced fraction from any numerator and non-zero denominator.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator == 0`
    /// - `Overflow` if the canonical form does not fit in i64
    ///   (e.g. `i64::MIN / -1`)
    pub fn new(numerator: i64, denominator: i64) -> RationalResult<Self> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Create from an integer. Already canonical, no reduction needed.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Reduce a wide pair and narrow it back to i64.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> RationalResult<Self> {
        if denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }

        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        // g takes the sign of the denominator so the result's denominator is positive
        let g = if denominator < 0 { -g } else { g };

        let numerator = numerator
            .checked_div(g)
            .and_then(|n| i64::try_from(n).ok())
            .ok_or(RationalError::Overflow)?;
        let denominator = denominator
            .checked_div(g)
            .and_then(|d| i64::try_from(d).ok())
            .ok_or(RationalError::Overflow)?;

        Ok(Self {
            numerator,
            denominator,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Always positive.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.numerator / self.denominator
    }

    /// Fractional part, carrying the sign of the value.
    ///
    /// `integer_part() + fractional_part()` equals the value.
    #[inline]
    pub const fn fractional_part(self) -> Self {
        let remainder = self.numerator % self.denominator;
        if remainder == 0 {
            Self::ZERO
        } else {
            // gcd(n % d, d) == gcd(n, d) == 1, so the pair stays reduced
            Self {
                numerator: remainder,
                denominator: self.denominator,
            }
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// True when the denominator is 1.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> RationalResult<Self> {
        self.numerator
            .checked_neg()
            .map(|numerator| Self {
                numerator,
                denominator: self.denominator,
            })
            .ok_or(RationalError::Overflow)
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`.
    #[inline]
    pub fn abs(self) -> RationalResult<Self> {
        self.numerator
            .checked_abs()
            .map(|numerator| Self {
                numerator,
                denominator: self.denominator,
            })
            .ok_or(RationalError::Overflow)
    }

    /// Checked addition over the least common denominator.
    ///
    /// Intermediates are kept in i128; only the reduced result must fit in i64.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced sum is out of range.
    pub fn checked_add(self, rhs: Self) -> RationalResult<Self> {
        self.combine(rhs, false)
    }

    /// Checked subtraction, `self + (-rhs)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> RationalResult<Self> {
        self.combine(rhs, true)
    }

    fn combine(self, rhs: Self, negate_rhs: bool) -> RationalResult<Self> {
        let (an, ad) = (self.numerator as i128, self.denominator as i128);
        let (bn, bd) = (rhs.numerator as i128, rhs.denominator as i128);
        let bn = if negate_rhs { -bn } else { bn };

        let lcm = lcm(ad as u128, bd as u128) as i128;

        // Each term is bounded by 2^126, so the sum cannot leave i128
        Self::from_wide(lcm / ad * an + lcm / bd * bn, lcm)
    }

    /// Add one.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn increment(self) -> RationalResult<Self> {
        self.checked_add(Self::ONE)
    }

    /// Subtract one.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn decrement(self) -> RationalResult<Self> {
        self.checked_sub(Self::ONE)
    }

    /// Checked multiplication.
    ///
    /// Common factors are cancelled crosswise before multiplying.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced product is out of range.
    pub fn checked_mul(self, rhs: Self) -> RationalResult<Self> {
        Self::product(
            (self.numerator as i128, self.denominator as i128),
            (rhs.numerator as i128, rhs.denominator as i128),
        )
    }

    /// Checked division, `self * rhs.recip()`.
    ///
    /// The reciprocal is never materialized as an i64 pair, so dividing by
    /// a value whose numerator is `i64::MIN` works when the quotient fits.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is out of range
    pub fn checked_div(self, rhs: Self) -> RationalResult<Self> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::product(
            (self.numerator as i128, self.denominator as i128),
            (rhs.denominator as i128, rhs.numerator as i128),
        )
    }

    fn product(a: (i128, i128), b: (i128, i128)) -> RationalResult<Self> {
        let (n1, d1) = cancel(a.0, b.1);
        let (n2, d2) = cancel(b.0, a.1);
        Self::from_wide(n1 * n2, d1 * d2)
    }

    /// Reciprocal (numerator and denominator swapped).
    ///
    /// # Errors
    /// - `DivisionByZero` if the value is zero
    /// - `Overflow` if the numerator is `i64::MIN`
    pub fn recip(self) -> RationalResult<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// Integer power by repeated squaring.
    ///
    /// Negative exponents raise the reciprocal. `pow(0)` is 1 for every value,
    /// zero included.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero base with a negative exponent
    /// - `Overflow` if any intermediate power is out of range
    pub fn pow(self, exponent: i32) -> RationalResult<Self> {
        if exponent < 0 {
            return self.recip()?.pow_unsigned(exponent.unsigned_abs());
        }
        self.pow_unsigned(exponent.unsigned_abs())
    }

    fn pow_unsigned(self, exponent: u32) -> RationalResult<Self> {
        if exponent == 0 {
            return Ok(Self::ONE);
        }
        if exponent % 2 == 1 {
            return self.pow_unsigned(exponent - 1)?.checked_mul(self);
        }
        let half = self.pow_unsigned(exponent / 2)?;
        half.checked_mul(half)
    }

    // ========================================================================
    // Text Forms
    // ========================================================================

    /// Parse text in the given format, or by default precedence when `None`.
    ///
    /// Default precedence tries integer/mixed forms (`I`) and then decimal
    /// forms (`D`).
    ///
    /// # Errors
    /// - `ParseError` if the text matches no accepted grammar
    /// - `DivisionByZero` if a fraction has a zero denominator
    pub fn parse(text: &str, tag: Option<FormatTag>) -> RationalResult<Self> {
        Self::parse_with(text, tag, &FormatConfig::DEFAULT)
    }

    /// Parse with an explicit configuration.
    pub fn parse_with(
        text: &str,
        tag: Option<FormatTag>,
        config: &FormatConfig,
    ) -> RationalResult<Self> {
        let text = text.trim();
        match tag {
            Some(tag) => codec::codec_for(tag).decode(text, config),
            None => codec::decode_by_precedence(text, config),
        }
    }

    /// Parse with a format tag given as text (`"s"`, `"S"`, `"i"`, `"I"`, `"d"`, `"D"`).
    ///
    /// # Errors
    /// Returns `UnknownFormat` for any other tag, otherwise as [`Rational::parse`].
    pub fn parse_str(text: &str, tag: &str) -> RationalResult<Self> {
        Self::parse(text, Some(tag.parse()?))
    }

    /// Non-failing variant of [`Rational::parse`].
    pub fn try_parse(text: &str, tag: Option<FormatTag>) -> Option<Self> {
        Self::parse(text, tag).ok()
    }

    /// Render in the given format.
    pub fn format(self, tag: FormatTag) -> String {
        self.format_with(Some(tag), &FormatConfig::DEFAULT)
    }

    /// Render with an explicit configuration. `None` uses the configured default tag.
    pub fn format_with(self, tag: Option<FormatTag>, config: &FormatConfig) -> String {
        codec::codec_for(tag.unwrap_or(config.default_tag)).encode(self, config)
    }

    /// Render with a format tag given as text.
    ///
    /// # Errors
    /// Returns `UnknownFormat` for a tag outside the documented set.
    pub fn format_str(self, tag: &str) -> RationalResult<String> {
        Ok(self.format(tag.parse()?))
    }
}

/// Divide a wide pair by its gcd. The denominator is never zero here.
fn cancel(numerator: i128, denominator: i128) -> (i128, i128) {
    let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
    (numerator / g, denominator / g)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Rational negation overflow")
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in production)
impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Rational addition overflow")
    }
}

impl Sub for Rational {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Rational subtraction overflow")
    }
}

impl Mul for Rational {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Rational multiplication overflow")
    }
}

impl Div for Rational {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("Rational division by zero or overflow")
    }
}

macro_rules! integer_rhs_ops {
    ($($trait:ident, $method:ident, $op:tt);*) => {
        $(
            impl $trait<i64> for Rational {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: i64) -> Self::Output {
                    self $op Self::from_integer(rhs)
                }
            }
        )*
    };
}

integer_rhs_ops!(Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);

macro_rules! assign_ops {
    ($($trait:ident, $method:ident, $op:tt);*) => {
        $(
            impl $trait for Rational {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl $trait<i64> for Rational {
                #[inline]
                fn $method(&mut self, rhs: i64) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

assign_ops!(AddAssign, add_assign, +; SubAssign, sub_assign, -; MulAssign, mul_assign, *; DivAssign, div_assign, /);

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().product()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format(FormatTag::IntegerOrFraction))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Rational {
    type Err = RationalError;

    /// Parse using default precedence.
    ///
    /// # Examples
    /// - "7" -> 7/1
    /// - "-3/6" -> -1/2
    /// - "2 1/4" -> 9/4
    /// - "0.125" -> 1/8
    /// - "0.(3)" -> 1/3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

// ============================================================================
// Serde (canonical `s` text form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}/{}", self.numerator, self.denominator))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&text, None).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
