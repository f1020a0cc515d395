// ============================================================================
// Property Tests
// Canonical form, arithmetic identities, ordering and codec round trips
// ============================================================================

use exact_rational::numeric::gcd;
use exact_rational::prelude::*;
use proptest::prelude::*;

/// Any constructible value, extremes included.
fn arb_rational() -> impl Strategy<Value = Rational> {
    (any::<i64>(), any::<i64>()).prop_filter_map("zero denominator or overflow", |(n, d)| {
        Rational::new(n, d).ok()
    })
}

/// Values small enough that sums and products of two stay in range.
fn arb_small_rational() -> impl Strategy<Value = Rational> {
    (-1_000_000i64..=1_000_000, 1i64..=1_000_000)
        .prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

/// Denominators of the form 2^a * 5^b, so the decimal expansion terminates.
fn arb_terminating_rational() -> impl Strategy<Value = Rational> {
    (-1_000_000_000_000i64..=1_000_000_000_000, 0u32..=10, 0u32..=10)
        .prop_map(|(n, a, b)| Rational::new(n, 2i64.pow(a) * 5i64.pow(b)).unwrap())
}

/// Denominators whose expansion needs at most 18 fixed plus repeating digits.
const SHORT_CYCLE_DENOMINATORS: [i64; 34] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 20, 21, 24, 25, 27, 28, 33, 37, 40,
    41, 44, 55, 63, 64, 99, 101, 125, 1000,
];

fn arb_short_cycle_rational() -> impl Strategy<Value = Rational> {
    (
        -1_000_000i64..=1_000_000,
        prop::sample::select(SHORT_CYCLE_DENOMINATORS.to_vec()),
    )
        .prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn cross_compare(a: Rational, b: Rational) -> std::cmp::Ordering {
    let lhs = a.numerator() as i128 * b.denominator() as i128;
    let rhs = b.numerator() as i128 * a.denominator() as i128;
    lhs.cmp(&rhs)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
        prop_assume!(d != 0);
        if let Ok(value) = Rational::new(n, d) {
            prop_assert!(value.denominator() > 0);
            if value.numerator() == 0 {
                prop_assert_eq!(value.denominator(), 1);
            } else {
                let g = gcd(
                    value.numerator().unsigned_abs() as u128,
                    value.denominator() as u128,
                );
                prop_assert_eq!(g, 1);
            }
            // Same value as n/d
            prop_assert_eq!(
                n as i128 * value.denominator() as i128,
                value.numerator() as i128 * d as i128
            );
        }
    }

    #[test]
    fn test_construction_is_idempotent(value in arb_rational()) {
        let again = Rational::new(value.numerator(), value.denominator()).unwrap();
        prop_assert_eq!(again.numerator(), value.numerator());
        prop_assert_eq!(again.denominator(), value.denominator());
    }

    #[test]
    fn test_additive_inverse(value in arb_rational()) {
        if let Ok(negated) = value.checked_neg() {
            prop_assert_eq!(value.checked_add(negated), Ok(Rational::ZERO));
            prop_assert_eq!(value.checked_sub(value), Ok(Rational::ZERO));
        }
    }

    #[test]
    fn test_multiplicative_inverse(value in arb_rational()) {
        prop_assume!(!value.is_zero());
        if let Ok(inverse) = value.recip() {
            prop_assert_eq!(value.checked_mul(inverse), Ok(Rational::ONE));
        }
    }

    #[test]
    fn test_pow_identities(value in arb_rational()) {
        prop_assert_eq!(value.pow(0), Ok(Rational::ONE));
        prop_assert_eq!(value.pow(1), Ok(value));
        prop_assert_eq!(value.pow(2), value.checked_mul(value));
    }

    #[test]
    fn test_arithmetic_laws(a in arb_small_rational(), b in arb_small_rational(), c in arb_small_rational()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a + b) * c, a * c + b * c);
        prop_assert_eq!(a - b, a + (-b));
        if !b.is_zero() {
            prop_assert_eq!((a / b) * b, a);
        }
    }

    #[test]
    fn test_ordering_matches_cross_multiplication(a in arb_rational(), b in arb_rational()) {
        prop_assert_eq!(a.cmp(&b), cross_compare(a, b));
        prop_assert_eq!(a.compare_to(&b).signum(), cross_compare(a, b) as i32);
    }

    #[test]
    fn test_ordering_is_total(a in arb_rational(), b in arb_rational(), c in arb_rational()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&held| held).count(), 1);
        if a < b && b < c {
            prop_assert!(a < c);
        }
    }

    #[test]
    fn test_round_trip_fraction_and_mixed(value in arb_rational()) {
        for tag in [
            FormatTag::Fraction,
            FormatTag::IntegerOrFraction,
            FormatTag::Mixed,
            FormatTag::IntegerOrMixed,
        ] {
            let text = value.format(tag);
            prop_assert_eq!(Rational::parse(&text, Some(tag)), Ok(value), "{} as {}", text, tag);
        }
    }

    #[test]
    fn test_round_trip_default_precedence(value in arb_rational()) {
        let text = value.format(FormatTag::IntegerOrMixed);
        prop_assert_eq!(Rational::parse(&text, None), Ok(value));
        prop_assert_eq!(text.parse::<Rational>(), Ok(value));
    }

    #[test]
    fn test_round_trip_decimal(value in arb_terminating_rational()) {
        let text = value.format(FormatTag::Decimal);
        prop_assert_eq!(Rational::parse(&text, Some(FormatTag::Decimal)), Ok(value), "{}", text);
    }

    #[test]
    fn test_round_trip_repeating_decimal(value in arb_short_cycle_rational()) {
        let text = value.format(FormatTag::RepeatingDecimal);
        prop_assert!(!text.ends_with("..."));
        prop_assert_eq!(
            Rational::parse(&text, Some(FormatTag::RepeatingDecimal)),
            Ok(value),
            "{}",
            text
        );
    }
}
