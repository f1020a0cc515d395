// ============================================================================
// Decimal Codecs
// `d`: decimal quotient through rust_decimal
// `D`: terminating decimal, else a parenthesized repeating block
// ============================================================================

use super::scanner::{assembled, literal, signed_sum, Scanner};
use crate::domain::config::{FormatConfig, FormatTag};
use crate::interfaces::RationalCodec;
use crate::numeric::{pow10, Rational, RationalError, RationalResult};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// `[+-]?\d+(\.\d+)?`, converted exactly.
///
/// Literals are held as a `Decimal` without rounding. Anything past its
/// 96-bit mantissa or 28-digit scale is rejected, not rounded.
pub struct DecimalCodec;

impl DecimalCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DecimalCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for DecimalCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::Decimal
    }

    fn encode(&self, value: Rational, _config: &FormatConfig) -> String {
        value.to_decimal().normalize().to_string()
    }

    fn decode(&self, text: &str, _config: &FormatConfig) -> RationalResult<Rational> {
        let mut scanner = Scanner::new(text);
        let negative = scanner.sign();
        let whole = scanner.digits()?;
        let fraction = if scanner.eat('.') { scanner.digits()? } else { "" };
        scanner.finish()?;

        // Trailing zeros carry no value and would only widen the scale
        let fraction = fraction.trim_end_matches('0');
        let scale = u32::try_from(fraction.len()).map_err(|_| RationalError::ParseError)?;
        let magnitude: i128 = [whole, fraction]
            .concat()
            .parse()
            .map_err(|_| RationalError::ParseError)?;
        let mantissa = if negative { -magnitude } else { magnitude };

        let decimal = Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| RationalError::ParseError)?;
        assembled(Rational::from_decimal_exact(decimal))
    }

    fn name(&self) -> &'static str {
        "Decimal"
    }
}

/// [`DecimalCodec`], else `[+-]?\d+\.\d*\(\d+\)`
pub struct RepeatingDecimalCodec {
    decimal: DecimalCodec,
}

impl RepeatingDecimalCodec {
    pub const fn new() -> Self {
        Self {
            decimal: DecimalCodec::new(),
        }
    }

    /// `I.F(R)` is `I + (FR - F) / (10^n - 10^(n-k))` with `n = |F| + |R|`, `k = |R|`.
    fn decode_repeating(text: &str, config: &FormatConfig) -> RationalResult<Rational> {
        let mut scanner = Scanner::new(text);
        let negative = scanner.sign();
        let whole = scanner.magnitude()?;
        scanner.expect('.')?;
        let fixed = scanner.digits_opt();
        scanner.expect('(')?;
        let cycle = scanner.digits()?;
        scanner.expect(')')?;
        scanner.finish()?;

        let n = fixed.len() + cycle.len();
        let budget = config.repeating_digits();
        if n > budget as usize {
            tracing::trace!(
                "repeating decimal {} has {} digits, budget is {}",
                text,
                n,
                budget
            );
            return Err(RationalError::ParseError);
        }

        let all = literal(&[fixed, cycle].concat())?;
        let head = if fixed.is_empty() { 0 } else { literal(fixed)? };
        let denominator = pow10(n as u32)
            .zip(pow10(fixed.len() as u32))
            .map(|(full, fixed_part)| full - fixed_part)
            .ok_or(RationalError::ParseError)?;

        let fraction = Rational::new(all - head, denominator)?;
        signed_sum(negative, whole, fraction)
    }

    /// Long division of `|value|`, remembering where each remainder first appeared.
    fn expand(value: Rational, config: &FormatConfig) -> String {
        let mut out = String::new();
        if value.is_negative() {
            out.push('-');
        }

        let denominator = value.denominator() as u128;
        let mut dividend = value.numerator().unsigned_abs() as u128;
        let mut seen: HashMap<u128, usize> = HashMap::new();

        let cap = config.expansion_digits();
        for step in 0..cap {
            // First step emits the integer part, later steps a single digit
            if step == 1 {
                out.push('.');
            }
            out.push_str(&(dividend / denominator).to_string());

            let remainder = dividend % denominator;
            if remainder == 0 {
                return out;
            }
            if let Some(&start) = seen.get(&remainder) {
                out.insert(start, '(');
                out.push(')');
                return out;
            }
            // Where the next digit lands, past the point after the integer part
            seen.insert(remainder, out.len() + usize::from(step == 0));
            dividend = remainder * 10;
        }

        tracing::debug!(
            "expansion of {}/{} stopped after {} digits",
            value.numerator(),
            value.denominator(),
            cap
        );
        out.push_str(&config.truncation_marker);
        out
    }
}

impl Default for RepeatingDecimalCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalCodec for RepeatingDecimalCodec {
    fn tag(&self) -> FormatTag {
        FormatTag::RepeatingDecimal
    }

    fn encode(&self, value: Rational, config: &FormatConfig) -> String {
        Self::expand(value, config)
    }

    fn decode(&self, text: &str, config: &FormatConfig) -> RationalResult<Rational> {
        match self.decimal.decode(text, config) {
            Err(RationalError::ParseError) => Self::decode_repeating(text, config),
            result => result,
        }
    }

    fn name(&self) -> &'static str {
        "RepeatingDecimal"
    }
}
