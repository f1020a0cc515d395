// ============================================================================
// Integer Helpers
// Greatest common divisor and least common multiple over wide integers
// ============================================================================

/// Greatest common divisor (Euclid).
///
/// `gcd(a, 0) == a` and `gcd(0, b) == b`.
#[inline]
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two positive values.
///
/// Divides before multiplying to keep the intermediate small.
#[inline]
pub const fn lcm(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}

/// Compute 10^n, or `None` once it leaves the i64 range.
pub(crate) const fn pow10(n: u32) -> Option<i64> {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result = match result.checked_mul(10) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(result)
}
