// ============================================================================
// Rational Errors
// Error types for rational construction, arithmetic, parsing and formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while building, combining, parsing or formatting rationals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// A denominator would have been zero
    DivisionByZero,
    /// Result does not fit the i64 numerator/denominator range
    Overflow,
    /// Input text matched none of the accepted grammars
    ParseError,
    /// Format tag outside `s`, `S`, `i`, `I`, `d`, `D`
    UnknownFormat,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "division by zero"),
            RationalError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the 64-bit range")
            },
            RationalError::ParseError => {
                write!(f, "invalid input: could not parse rational value")
            },
            RationalError::UnknownFormat => write!(f, "unknown format tag"),
        }
    }
}

impl std::error::Error for RationalError {}

/// Result type alias for rational operations
pub type RationalResult<T> = Result<T, RationalError>;
