// ============================================================================
// Codec Factory
// Resolves format tags to codecs and runs default-precedence parsing
// ============================================================================

use super::decimal::{DecimalCodec, RepeatingDecimalCodec};
use super::fraction::{FractionCodec, IntegerOrFractionCodec};
use super::mixed::{IntegerOrMixedCodec, MixedCodec};
use crate::domain::config::{FormatConfig, FormatTag};
use crate::interfaces::RationalCodec;
use crate::numeric::{Rational, RationalError, RationalResult};

// Codecs are stateless, so one shared instance per tag suffices
static FRACTION: FractionCodec = FractionCodec::new();
static INTEGER_OR_FRACTION: IntegerOrFractionCodec = IntegerOrFractionCodec::new();
static MIXED: MixedCodec = MixedCodec::new();
static INTEGER_OR_MIXED: IntegerOrMixedCodec = IntegerOrMixedCodec::new();
static DECIMAL: DecimalCodec = DecimalCodec::new();
static REPEATING_DECIMAL: RepeatingDecimalCodec = RepeatingDecimalCodec::new();

/// Tags tried, in order, when the caller does not pin a format.
pub const DEFAULT_PRECEDENCE: [FormatTag; 2] =
    [FormatTag::IntegerOrMixed, FormatTag::RepeatingDecimal];

/// Returns the codec implementing `tag`
///
/// # Example
/// ```
/// use exact_rational::codec::codec_for;
/// use exact_rational::prelude::*;
///
/// let codec = codec_for(FormatTag::Mixed);
/// let value = codec.decode("3 1/2", &FormatConfig::default()).unwrap();
/// assert_eq!(value, Rational::new(7, 2).unwrap());
/// assert_eq!(codec.name(), "Mixed");
/// ```
pub fn codec_for(tag: FormatTag) -> &'static dyn RationalCodec {
    match tag {
        FormatTag::Fraction => &FRACTION,
        FormatTag::IntegerOrFraction => &INTEGER_OR_FRACTION,
        FormatTag::Mixed => &MIXED,
        FormatTag::IntegerOrMixed => &INTEGER_OR_MIXED,
        FormatTag::Decimal => &DECIMAL,
        FormatTag::RepeatingDecimal => &REPEATING_DECIMAL,
    }
}

/// Parse trimmed text by [`DEFAULT_PRECEDENCE`].
///
/// Only a `ParseError` moves on to the next tag; any other failure means the
/// text matched a grammar and is reported as is.
pub fn decode_by_precedence(text: &str, config: &FormatConfig) -> RationalResult<Rational> {
    for tag in DEFAULT_PRECEDENCE {
        let codec = codec_for(tag);
        match codec.decode(text, config) {
            Err(RationalError::ParseError) => continue,
            result => {
                tracing::trace!("parsed {:?} with {} codec", text, codec.name());
                return result;
            },
        }
    }
    Err(RationalError::ParseError)
}
