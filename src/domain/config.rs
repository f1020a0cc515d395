// ============================================================================
// Format Configuration
// Text format tags and rendering/parsing limits
// ============================================================================

use crate::numeric::{RationalError, RationalResult};
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit cap for repeating-decimal expansion
pub const DEFAULT_EXPANSION_DIGITS: usize = 100;

/// Longest fixed + repeating digit run a repeating decimal may have when parsed.
/// `10^18` is the largest power of ten below `i64::MAX`.
pub const MAX_REPEATING_DIGITS: u32 = 18;

// ============================================================================
// Format Tag
// ============================================================================

/// Textual representation of a rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatTag {
    /// `s` - always `n/d`, e.g. `"3/1"`, `"-1/2"`
    Fraction,

    /// `S` - bare integer when the denominator is 1, otherwise `n/d`
    #[default]
    IntegerOrFraction,

    /// `i` - always mixed, e.g. `"3 1/2"`, `"-0 1/2"`, `"2 0/1"`
    Mixed,

    /// `I` - mixed when there is both an integer part and a remainder,
    /// otherwise as `S`
    IntegerOrMixed,

    /// `d` - decimal quotient, e.g. `"0.25"`
    Decimal,

    /// `D` - terminating decimal or parenthesized repeating block, e.g. `"0.1(6)"`
    RepeatingDecimal,
}

impl FormatTag {
    /// All tags, in documentation order.
    pub const ALL: [FormatTag; 6] = [
        FormatTag::Fraction,
        FormatTag::IntegerOrFraction,
        FormatTag::Mixed,
        FormatTag::IntegerOrMixed,
        FormatTag::Decimal,
        FormatTag::RepeatingDecimal,
    ];

    /// Single-character tag.
    pub const fn as_char(self) -> char {
        match self {
            FormatTag::Fraction => 's',
            FormatTag::IntegerOrFraction => 'S',
            FormatTag::Mixed => 'i',
            FormatTag::IntegerOrMixed => 'I',
            FormatTag::Decimal => 'd',
            FormatTag::RepeatingDecimal => 'D',
        }
    }

    /// Look up a tag by its character.
    ///
    /// # Errors
    /// Returns `UnknownFormat` for any other character.
    pub const fn from_char(c: char) -> RationalResult<Self> {
        match c {
            's' => Ok(FormatTag::Fraction),
            'S' => Ok(FormatTag::IntegerOrFraction),
            'i' => Ok(FormatTag::Mixed),
            'I' => Ok(FormatTag::IntegerOrMixed),
            'd' => Ok(FormatTag::Decimal),
            'D' => Ok(FormatTag::RepeatingDecimal),
            _ => Err(RationalError::UnknownFormat),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for FormatTag {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(RationalError::UnknownFormat),
        }
    }
}

// ============================================================================
// Format Configuration
// ============================================================================

/// Rendering and parsing limits shared by all codecs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Tag used when the caller does not name one
    pub default_tag: FormatTag,

    /// Maximum number of long-division steps for `D` output
    pub max_expansion_digits: usize,

    /// Appended to `D` output when the digit cap is reached
    pub truncation_marker: Cow<'static, str>,

    /// Maximum fixed + repeating digits accepted by the `D` parser (at most 18)
    pub max_repeating_digits: u32,
}

impl FormatConfig {
    /// Default limits: tag `S`, 100 expansion digits, `"..."` marker, 18 repeating digits
    pub const DEFAULT: FormatConfig = FormatConfig {
        default_tag: FormatTag::IntegerOrFraction,
        max_expansion_digits: DEFAULT_EXPANSION_DIGITS,
        truncation_marker: Cow::Borrowed("..."),
        max_repeating_digits: MAX_REPEATING_DIGITS,
    };

    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Builder method: Set the tag used when none is given
    pub fn with_default_tag(mut self, tag: FormatTag) -> Self {
        self.default_tag = tag;
        self
    }

    /// Builder method: Set the repeating-decimal digit cap
    pub fn with_max_expansion_digits(mut self, digits: usize) -> Self {
        self.max_expansion_digits = digits;
        self
    }

    /// Builder method: Set the truncation marker
    pub fn with_truncation_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.truncation_marker = marker.into();
        self
    }

    /// Builder method: Set the repeating-decimal parse budget
    pub fn with_max_repeating_digits(mut self, digits: u32) -> Self {
        self.max_repeating_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_expansion_digits == 0 {
            return Err("Expansion digit cap must be positive".to_string());
        }

        if self.max_repeating_digits == 0 || self.max_repeating_digits > MAX_REPEATING_DIGITS {
            return Err(format!(
                "Repeating digit budget must be between 1 and {}",
                MAX_REPEATING_DIGITS
            ));
        }

        Ok(())
    }

    /// Expansion cap the codecs apply: at least one step, so the integer part is always written.
    pub fn expansion_digits(&self) -> usize {
        self.max_expansion_digits.max(1)
    }

    /// Repeating-decimal budget the codecs apply, never above [`MAX_REPEATING_DIGITS`].
    pub fn repeating_digits(&self) -> u32 {
        self.max_repeating_digits.min(MAX_REPEATING_DIGITS)
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatConfig {
    /// Mixed-number output (`I`), e.g. for recipes and measurements
    pub fn mixed_numbers() -> Self {
        Self::new().with_default_tag(FormatTag::IntegerOrMixed)
    }

    /// Repeating-decimal output (`D`)
    pub fn decimal_expansion() -> Self {
        Self::new().with_default_tag(FormatTag::RepeatingDecimal)
    }
}
