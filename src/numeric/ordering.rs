// ============================================================================
// Rational Ordering
// Overflow-free comparison by continued-fraction expansion
// ============================================================================
//
// Cross-multiplying `a/b` against `c/d` needs up to 126 bits. Instead, the
// comparator walks both continued-fraction expansions term by term: equal
// integer parts hand the comparison over to the reciprocals of the
// remainders, with operands swapped. Every step is a Euclid step on each
// pair, so the loop terminates and no value ever exceeds u64.

use super::rational::Rational;
use std::cmp::Ordering;

/// Compare two non-negative fractions given as `(numerator, denominator)`.
///
/// Denominators must be non-zero; the pairs need not be reduced.
pub(crate) fn compare_magnitude(mut a: (u64, u64), mut b: (u64, u64)) -> Ordering {
    loop {
        let (int_a, int_b) = (a.0 / a.1, b.0 / b.1);
        if int_a != int_b {
            return int_a.cmp(&int_b);
        }

        let (rem_a, rem_b) = (a.0 % a.1, b.0 % b.1);
        match (rem_a, rem_b) {
            (0, 0) => return Ordering::Equal,
            // A terminated expansion is the smaller one
            (0, _) => return Ordering::Less,
            (_, 0) => return Ordering::Greater,
            // rem_a/a.1 < rem_b/b.1  <=>  b.1/rem_b < a.1/rem_a
            _ => {
                let next_a = (b.1, rem_b);
                let next_b = (a.1, rem_a);
                a = next_a;
                b = next_b;
            },
        }
    }
}

impl Rational {
    /// Sign of the value: -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.numerator().signum()
    }

    /// Compare absolute values, ignoring sign.
    ///
    /// Works for `i64::MIN` numerators, whose absolute value is not itself a `Rational`.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        compare_magnitude(self.magnitude(), other.magnitude())
    }

    /// Three-way compare: -1, 0 or 1.
    pub fn compare_to(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    #[inline]
    fn magnitude(self) -> (u64, u64) {
        (
            self.numerator().unsigned_abs(),
            self.denominator().unsigned_abs(),
        )
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            by_sign => return by_sign,
        }

        // Same non-zero sign: negative values order by reversed magnitude
        if self.is_negative() {
            other.cmp_magnitude(self)
        } else {
            self.cmp_magnitude(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    /// Reference ordering by exact i128 cross-multiplication.
    fn cross_cmp(a: Rational, b: Rational) -> Ordering {
        let lhs = a.numerator() as i128 * b.denominator() as i128;
        let rhs = b.numerator() as i128 * a.denominator() as i128;
        lhs.cmp(&rhs)
    }

    #[test]
    fn test_compare_magnitude() {
        assert_eq!(compare_magnitude((1, 2), (1, 3)), Ordering::Greater);
        assert_eq!(compare_magnitude((2, 4), (1, 2)), Ordering::Equal);
        assert_eq!(compare_magnitude((3, 1), (7, 2)), Ordering::Less);
        assert_eq!(compare_magnitude((0, 1), (1, 1000)), Ordering::Less);
        assert_eq!(compare_magnitude((5, 1), (5, 1)), Ordering::Equal);
    }

    #[test]
    fn test_compare_magnitude_deep_expansion() {
        // Consecutive Fibonacci ratios share long continued-fraction prefixes
        let fib = |n: usize| {
            let (mut a, mut b) = (0u64, 1u64);
            for _ in 0..n {
                let next = a + b;
                a = b;
                b = next;
            }
            a
        };
        let x = (fib(90), fib(89));
        let y = (fib(89), fib(88));
        assert_eq!(compare_magnitude(x, y), Ordering::Less);
        assert_eq!(compare_magnitude(y, x), Ordering::Greater);
    }

    #[test]
    fn test_ordering_by_sign() {
        assert!(r(-5, 1) < r(3, 1));
        assert_eq!(r(-5, 1).compare_to(&r(3, 1)), -1);
        assert!(Rational::ZERO > r(-1, 1000));
        assert!(Rational::ZERO < r(1, 1000));
    }

    #[test]
    fn test_ordering_negative() {
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(-7, 2) < r(-3, 1));
        assert_eq!(r(-2, 4).cmp(&r(-1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_ordering_extremes() {
        assert!(Rational::MIN < Rational::MAX);
        assert!(Rational::MIN < r(i64::MIN + 1, 1));
        assert!(r(i64::MAX, i64::MAX - 1) < r(i64::MAX - 1, i64::MAX - 2));
        assert!(r(1, i64::MAX) < r(1, i64::MAX - 1));
        assert_eq!(Rational::MIN.cmp_magnitude(&Rational::MAX), Ordering::Greater);
    }

    #[test]
    fn test_compare_to() {
        assert_eq!(r(1, 2).compare_to(&r(1, 2)), 0);
        assert_eq!(r(2, 3).compare_to(&r(1, 2)), 1);
        assert_eq!(r(1, 3).compare_to(&r(1, 2)), -1);
    }

    #[test]
    fn test_signum() {
        assert_eq!(r(-3, 4).signum(), -1);
        assert_eq!(Rational::ZERO.signum(), 0);
        assert_eq!(r(3, 4).signum(), 1);
    }

    #[test]
    fn test_sorting() {
        let mut values = vec![r(1, 2), r(-1, 3), r(2, 1), Rational::ZERO, r(-5, 2)];
        values.sort();
        assert_eq!(values, vec![r(-5, 2), r(-1, 3), Rational::ZERO, r(1, 2), r(2, 1)]);
    }

    quickcheck! {
        fn prop_matches_cross_multiplication(an: i64, ad: i64, bn: i64, bd: i64) -> TestResult {
            let (Ok(a), Ok(b)) = (Rational::new(an, ad), Rational::new(bn, bd)) else {
                return TestResult::discard();
            };
            TestResult::from_bool(a.cmp(&b) == cross_cmp(a, b))
        }

        fn prop_antisymmetric(an: i64, ad: i64, bn: i64, bd: i64) -> TestResult {
            let (Ok(a), Ok(b)) = (Rational::new(an, ad), Rational::new(bn, bd)) else {
                return TestResult::discard();
            };
            TestResult::from_bool(a.cmp(&b) == b.cmp(&a).reverse())
        }

        fn prop_transitive(values: Vec<(i32, i32)>) -> TestResult {
            let values: Vec<Rational> = values
                .into_iter()
                .filter_map(|(n, d)| Rational::new(n as i64, d as i64).ok())
                .collect();
            if values.len() < 3 {
                return TestResult::discard();
            }
            let (a, b, c) = (values[0], values[1], values[2]);
            if a <= b && b <= c {
                TestResult::from_bool(a <= c && (a == c) == (a == b && b == c))
            } else {
                TestResult::discard()
            }
        }
    }
}
