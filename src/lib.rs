// ============================================================================
// Exact Rational Library
// Reduced 64-bit fractions with exact arithmetic and textual codecs
// ============================================================================

//! # Exact Rational
//!
//! An exact rational value type backed by two `i64`s, kept in reduced form.
//!
//! ## Features
//!
//! - **Canonical form** after every construction: positive denominator, coprime parts
//! - **Checked arithmetic** with wide intermediates, so only results that do not fit overflow
//! - **Overflow-free ordering** by walking continued-fraction expansions
//! - **Textual codecs** for fractions, mixed numbers, decimals and repeating decimals
//! - **Decimal interop** through `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use exact_rational::prelude::*;
//!
//! let half = Rational::new(4, 8).unwrap();
//! assert_eq!(half.format(FormatTag::Fraction), "1/2");
//!
//! let mixed = Rational::parse("3 1/2", Some(FormatTag::Mixed)).unwrap();
//! assert_eq!(mixed, Rational::new(7, 2).unwrap());
//!
//! let third = Rational::new(1, 3).unwrap();
//! assert_eq!(third.format(FormatTag::RepeatingDecimal), "0.(3)");
//!
//! let sum = half.checked_add(third).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//!
//! assert_eq!(
//!     Rational::parse("1/0", Some(FormatTag::Fraction)),
//!     Err(RationalError::DivisionByZero)
//! );
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{codec_for, decode_by_precedence};
    pub use crate::domain::{FormatConfig, FormatTag};
    pub use crate::interfaces::RationalCodec;
    pub use crate::numeric::{Rational, RationalError, RationalResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_documented_cases() {
        assert_eq!(r(4, 8).format(FormatTag::Fraction), "1/2");
        assert_eq!(Rational::parse("3 1/2", Some(FormatTag::Mixed)), Ok(r(7, 2)));
        assert_eq!(r(1, 3).format(FormatTag::RepeatingDecimal), "0.(3)");
        assert_eq!(r(1, 4).format(FormatTag::RepeatingDecimal), "0.25");
        assert!(r(-5, 1).compare_to(&r(3, 1)) < 0);
        assert_eq!(
            Rational::parse("1/0", Some(FormatTag::Fraction)),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(Rational::parse("  3/4\n", None), Ok(r(3, 4)));
        assert_eq!(Rational::parse("\t0.(3) ", Some(FormatTag::RepeatingDecimal)), Ok(r(1, 3)));
    }

    #[test]
    fn test_default_precedence() {
        assert_eq!(Rational::parse("5", None), Ok(r(5, 1)));
        assert_eq!(Rational::parse("-2 3/4", None), Ok(r(-11, 4)));
        assert_eq!(Rational::parse("2.5", None), Ok(r(5, 2)));
        assert_eq!(Rational::parse("0.1(6)", None), Ok(r(1, 6)));
        assert_eq!(Rational::parse("half", None), Err(RationalError::ParseError));
        assert_eq!(Rational::try_parse("half", None), None);
        assert_eq!("7/14".parse::<Rational>(), Ok(r(1, 2)));
    }

    #[test]
    fn test_decimal_parse_is_exact_or_fails() {
        for tag in [Some(FormatTag::Decimal), Some(FormatTag::RepeatingDecimal), None] {
            assert_eq!(
                Rational::parse("0.99999999999999999999999999999", tag),
                Err(RationalError::ParseError)
            );
            assert_eq!(
                Rational::parse("0.50000000000000000000000000001", tag),
                Err(RationalError::ParseError)
            );
            assert_eq!(Rational::parse("1_000", tag), Err(RationalError::ParseError));
            assert_eq!(
                Rational::parse("0.1234567890123", tag),
                Ok(r(1_234_567_890_123, 10_000_000_000_000))
            );
        }
    }

    #[test]
    fn test_leading_plus_sign() {
        assert_eq!(Rational::parse("+5", Some(FormatTag::IntegerOrFraction)), Ok(r(5, 1)));
        assert_eq!(Rational::parse("+5", None), Ok(r(5, 1)));
        assert_eq!(Rational::parse("+2 1/2", None), Ok(r(5, 2)));
        assert_eq!(Rational::parse("+2.5", Some(FormatTag::Decimal)), Ok(r(5, 2)));
    }

    #[test]
    fn test_zero_expansion_cap_keeps_integer_part() {
        let config = FormatConfig::decimal_expansion().with_max_expansion_digits(0);
        assert_eq!(r(22, 7).format_with(None, &config), "3...");
        assert_eq!(r(3, 4).format_with(None, &config), "0...");
    }

    #[test]
    fn test_format_tags_by_text() {
        let value = r(-7, 2);
        assert_eq!(value.format_str("s"), Ok("-7/2".to_string()));
        assert_eq!(value.format_str("S"), Ok("-7/2".to_string()));
        assert_eq!(value.format_str("i"), Ok("-3 1/2".to_string()));
        assert_eq!(value.format_str("I"), Ok("-3 1/2".to_string()));
        assert_eq!(value.format_str("d"), Ok("-3.5".to_string()));
        assert_eq!(value.format_str("D"), Ok("-3.5".to_string()));
        assert_eq!(value.format_str("x"), Err(RationalError::UnknownFormat));
        assert_eq!(Rational::parse_str("1/2", "q"), Err(RationalError::UnknownFormat));
        assert_eq!(Rational::parse_str("-3 1/2", "i"), Ok(value));
    }

    #[test]
    fn test_display_uses_integer_or_fraction() {
        assert_eq!(r(6, 3).to_string(), "2");
        assert_eq!(r(-1, 3).to_string(), "-1/3");
        assert_eq!(format!("{:>6}", r(1, 2)), "   1/2");
    }

    #[test]
    fn test_configured_default_tag() {
        let config = FormatConfig::mixed_numbers();
        assert_eq!(r(9, 4).format_with(None, &config), "2 1/4");
        let config = FormatConfig::default().with_default_tag(FormatTag::RepeatingDecimal);
        assert_eq!(r(2, 3).format_with(None, &config), "0.(6)");
    }

    #[test]
    fn test_negative_zero_whole_keeps_sign() {
        let value = r(-1, 2);
        assert_eq!(value.format(FormatTag::IntegerOrMixed), "-1/2");
        assert_eq!(value.format(FormatTag::Mixed), "-0 1/2");
        assert_eq!(Rational::parse("-0 1/2", Some(FormatTag::IntegerOrMixed)), Ok(value));
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = r(1, 6);
        let b = r(1, 3);
        assert_eq!(a + b, r(1, 2));
        assert_eq!(a - b, r(-1, 6));
        assert_eq!(a * b, r(1, 18));
        assert_eq!(a / b, r(1, 2));
        assert!(a < b);
        assert_eq!(b.pow(-2), Ok(r(9, 1)));

        let mut values = vec![r(3, 4), r(-1, 2), Rational::ZERO, r(2, 3)];
        values.sort();
        assert_eq!(values, vec![r(-1, 2), Rational::ZERO, r(2, 3), r(3, 4)]);
    }

    #[test]
    fn test_decimal_conversions() {
        let price = Decimal::from_str("12.3456789012").unwrap();
        assert_eq!(Rational::from_decimal(price), Ok(r(12_345_678_901, 1_000_000_000)));
        assert_eq!(Rational::from_decimal_exact(price), Ok(r(123_456_789_012, 10_000_000_000)));
        assert_eq!(r(1, 8).to_decimal(), Decimal::from_str("0.125").unwrap());
        assert_eq!(r(-7, 2).to_integer(), -3);
    }

    #[test]
    fn test_codec_registry() {
        for tag in FormatTag::ALL {
            let codec = codec_for(tag);
            let text = codec.encode(r(5, 4), &FormatConfig::DEFAULT);
            assert_eq!(codec.decode(&text, &FormatConfig::DEFAULT), Ok(r(5, 4)), "{}", codec.name());
        }
    }
}
