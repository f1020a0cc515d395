// ============================================================================
// Input Scanner
// Cursor over trimmed input for the fraction, mixed and repeating grammars
// ============================================================================

use crate::numeric::{Rational, RationalError, RationalResult};

/// Forward-only cursor. `digit` means ASCII `0-9`; whitespace follows `char::is_whitespace`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Consume `c` if it is next.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            },
            None => false,
        }
    }

    /// Require `c` next.
    pub(crate) fn expect(&mut self, c: char) -> RationalResult<()> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(RationalError::ParseError)
        }
    }

    /// Consume whitespace, returning how many characters were skipped.
    pub(crate) fn skip_whitespace(&mut self) -> usize {
        let trimmed = self.rest.trim_start();
        let skipped = self.rest[..self.rest.len() - trimmed.len()].chars().count();
        self.rest = trimmed;
        skipped
    }

    /// Optional leading `+` or `-`; true when negative.
    pub(crate) fn sign(&mut self) -> bool {
        if self.eat('-') {
            return true;
        }
        self.eat('+');
        false
    }

    /// Zero or more digits.
    pub(crate) fn digits_opt(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
    }

    /// One or more digits.
    pub(crate) fn digits(&mut self) -> RationalResult<&'a str> {
        match self.digits_opt() {
            "" => Err(RationalError::ParseError),
            digits => Ok(digits),
        }
    }

    /// `[+-]?\d+` as an i64.
    pub(crate) fn signed_integer(&mut self) -> RationalResult<i64> {
        let start = self.rest;
        self.sign();
        self.digits()?;
        literal(&start[..start.len() - self.rest.len()])
    }

    /// `\d+` as an i64.
    pub(crate) fn unsigned_integer(&mut self) -> RationalResult<i64> {
        literal(self.digits()?)
    }

    /// `\d+` as a u64 magnitude, so `-9223372036854775808` can be assembled.
    pub(crate) fn magnitude(&mut self) -> RationalResult<u64> {
        self.digits()?.parse().map_err(|_| RationalError::ParseError)
    }

    /// Require the input to be fully consumed.
    pub(crate) fn finish(&self) -> RationalResult<()> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(RationalError::ParseError)
        }
    }
}

/// Parse an integer literal; out-of-range literals are a parse failure.
pub(crate) fn literal(text: &str) -> RationalResult<i64> {
    text.parse().map_err(|_| RationalError::ParseError)
}

/// `±(whole + fraction)`, evaluated wide and narrowed once.
pub(crate) fn signed_sum(
    negative: bool,
    whole: u64,
    fraction: Rational,
) -> RationalResult<Rational> {
    let denominator = fraction.denominator() as i128;
    // < 2^127: whole < 2^64, denominator < 2^63
    let magnitude = whole as i128 * denominator + fraction.numerator() as i128;
    let numerator = if negative { -magnitude } else { magnitude };
    assembled(Rational::from_wide(numerator, denominator))
}

/// A value assembled from in-range literals that still overflows is a parse failure.
pub(crate) fn assembled(value: RationalResult<Rational>) -> RationalResult<Rational> {
    value.map_err(|err| match err {
        RationalError::Overflow => RationalError::ParseError,
        other => other,
    })
}
