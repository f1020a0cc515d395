// ============================================================================
// Codec Module
// Text representations of rationals, one codec per format tag
// ============================================================================

mod decimal;
mod fraction;
mod mixed;
mod scanner;

pub mod factory;

pub use decimal::{DecimalCodec, RepeatingDecimalCodec};
pub use factory::{codec_for, decode_by_precedence, DEFAULT_PRECEDENCE};
pub use fraction::{FractionCodec, IntegerOrFractionCodec};
pub use mixed::{IntegerOrMixedCodec, MixedCodec};
