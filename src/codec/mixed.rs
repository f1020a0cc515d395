// ============================================================================
// Mixed-Number Codecs
// `i`: always whole part + proper fraction
// `I`: integer or fraction when either part is absent, mixed otherwise
// ============================================================================

use super::fraction::IntegerOrFractionCodec;
use super::scanner::{signed_sum, Scanner};
use crate::domain::config::{FormatConfig, FormatTag};
use crate::interfaces::RationalCodec;
use crate::numeric::{Rational, RationalError, RationalResult};

/// `[+-]?\d+\s+\d+\s*/\s*\d+`
///
/// The leading sign applies to the whole value: `-3 1/2` is `-7/2`.
pub struct MixedCodec;

impl MixedCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MixedCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for MixedCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::Mixed
    }

    fn encode(&self, value: Rational, _config: &FormatConfig) -> String {
        let sign = if value.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}/{}",
            sign,
            value.integer_part().unsigned_abs(),
            value.fractional_part().numerator().unsigned_abs(),
            value.denominator()
        )
    }

    fn decode(&self, text: &str, _config: &FormatConfig) -> RationalResult<Rational> {
        let mut scanner = Scanner::new(text);
        let negative = scanner.sign();
        let whole = scanner.magnitude()?;
        if scanner.skip_whitespace() == 0 {
            return Err(RationalError::ParseError);
        }
        let numerator = scanner.unsigned_integer()?;
        scanner.skip_whitespace();
        scanner.expect('/')?;
        scanner.skip_whitespace();
        let denominator = scanner.unsigned_integer()?;
        scanner.finish()?;

        let fraction = Rational::new(numerator, denominator)?;
        signed_sum(negative, whole, fraction)
    }

    fn name(&self) -> &'static str {
        "Mixed"
    }
}

/// [`IntegerOrFractionCodec`], else [`MixedCodec`]
pub struct IntegerOrMixedCodec {
    simple: IntegerOrFractionCodec,
    mixed: MixedCodec,
}

impl IntegerOrMixedCodec {
    pub const fn new() -> Self {
        Self {
            simple: IntegerOrFractionCodec::new(),
            mixed: MixedCodec::new(),
        }
    }
}

impl Default for IntegerOrMixedCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for IntegerOrMixedCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::IntegerOrMixed
    }

    fn encode(&self, value: Rational, config: &FormatConfig) -> String {
        let whole = value.integer_part();
        let remainder = value.fractional_part();

        // A zero whole part falls back to `S`, so `-1/2` keeps its sign
        if whole == 0 || remainder.is_zero() {
            return self.simple.encode(value, config);
        }

        format!(
            "{} {}/{}",
            whole,
            remainder.numerator().unsigned_abs(),
            value.denominator()
        )
    }

    fn decode(&self, text: &str, config: &FormatConfig) -> RationalResult<Rational> {
        match self.simple.decode(text, config) {
            Err(RationalError::ParseError) => self.mixed.decode(text, config),
            result => result,
        }
    }

    fn name(&self) -> &'static str {
        "IntegerOrMixed"
    }
}
