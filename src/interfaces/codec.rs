// ============================================================================
// Rational Codec Interface
// Defines the contract for pluggable text representations
// ============================================================================

use crate::domain::config::{FormatConfig, FormatTag};
use crate::numeric::{Rational, RationalResult};

/// Strategy pattern interface for text forms.
/// Implementations: fraction, integer-or-fraction, mixed, integer-or-mixed,
/// decimal, repeating decimal.
///
/// `decode` must be the inverse of `encode` for every value the encoding
/// represents exactly.
pub trait RationalCodec: Send + Sync {
    /// The format tag this codec implements
    fn tag(&self) -> FormatTag;

    /// Render a value
    fn encode(&self, value: Rational, config: &FormatConfig) -> String;

    /// Parse already-trimmed text
    ///
    /// # Errors
    /// - `ParseError` if the text does not match this codec's grammar
    /// - `DivisionByZero` if the text spells a zero denominator
    fn decode(&self, text: &str, config: &FormatConfig) -> RationalResult<Rational>;

    /// Get the codec name for logging
    fn name(&self) -> &'static str;

    /// Non-failing decode
    fn try_decode(&self, text: &str, config: &FormatConfig) -> Option<Rational> {
        self.decode(text, config).ok()
    }
}
