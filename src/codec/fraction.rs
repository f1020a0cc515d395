// ============================================================================
// Fraction Codecs
// `s`: always numerator/denominator
// `S`: bare integer when possible, otherwise `s`
// ============================================================================

use super::scanner::Scanner;
use crate::domain::config::{FormatConfig, FormatTag};
use crate::interfaces::RationalCodec;
use crate::numeric::{Rational, RationalError, RationalResult};

/// `[+-]?\d+\s*/\s*\d+`
pub struct FractionCodec;

impl FractionCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FractionCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for FractionCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::Fraction
    }

    fn encode(&self, value: Rational, _config: &FormatConfig) -> String {
        format!("{}/{}", value.numerator(), value.denominator())
    }

    fn decode(&self, text: &str, _config: &FormatConfig) -> RationalResult<Rational> {
        let mut scanner = Scanner::new(text);
        let numerator = scanner.signed_integer()?;
        scanner.skip_whitespace();
        scanner.expect('/')?;
        scanner.skip_whitespace();
        let denominator = scanner.unsigned_integer()?;
        scanner.finish()?;

        // Positive denominator: reduction cannot overflow, only a zero can fail
        Rational::new(numerator, denominator)
    }

    fn name(&self) -> &'static str {
        "Fraction"
    }
}

/// `[+-]?\d+`, else [`FractionCodec`]
pub struct IntegerOrFractionCodec {
    fraction: FractionCodec,
}

impl IntegerOrFractionCodec {
    pub const fn new() -> Self {
        Self {
            fraction: FractionCodec::new(),
        }
    }
}

impl Default for IntegerOrFractionCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for IntegerOrFractionCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::IntegerOrFraction
    }

    fn encode(&self, value: Rational, config: &FormatConfig) -> String {
        if value.is_integer() {
            value.numerator().to_string()
        } else {
            self.fraction.encode(value, config)
        }
    }

    fn decode(&self, text: &str, config: &FormatConfig) -> RationalResult<Rational> {
        let mut scanner = Scanner::new(text);
        match scanner.signed_integer().and_then(|value| {
            scanner.finish()?;
            Ok(value)
        }) {
            Ok(value) => Ok(Rational::from_integer(value)),
            Err(RationalError::ParseError) => self.fraction.decode(text, config),
            Err(err) => Err(err),
        }
    }

    fn name(&self) -> &'static str {
        "IntegerOrFraction"
    }
}
