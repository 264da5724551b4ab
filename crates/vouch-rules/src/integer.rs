//! Integer rules.
//!
//! Constructors are generic over every primitive integer type through the
//! sealed [`Integer`] trait, so an integer rule can only ever be chained into
//! an integer verifier.

use tracing::warn;

use vouch_core::Verifier;

use crate::number::{DivisibleBy, EqualTo, Integer, MaxValue, MinValue, NotEqualTo, ValueRange};

/// `value >= min`.
pub fn min_value<N: Integer>(min: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(MinValue::new(min), next)
}

/// `value <= max`, reported as "must be less than MAX".
pub fn max_value<N: Integer>(max: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(MaxValue::new(max), next)
}

/// `min <= value <= max`.
pub fn value_range<N: Integer>(min: N, max: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(ValueRange::new(min, max), next)
}

pub fn equal_to<N: Integer>(expected: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(EqualTo::new(expected), next)
}

pub fn not_equal_to<N: Integer>(rejected: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(NotEqualTo::new(rejected), next)
}

/// `value % divisor == 0`.
///
/// A zero divisor has no remainder to test; such a rule rejects every value
/// rather than faulting. Callers should treat a zero divisor as a
/// precondition violation.
pub fn divisible_by<N: Integer>(divisor: N, next: Verifier<N>) -> Verifier<N> {
    if divisor.is_zero() {
        warn!(rule = "divisible-by", "zero divisor: every value will be rejected");
    }
    Verifier::rule(DivisibleBy::new(divisor), next)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vouch_core::{finalize, run};

    use super::*;

    #[test]
    fn test_min_value() {
        let v = min_value(0_i64, finalize());
        assert!(run(&0, &v).is_ok());
        assert_eq!(v.evaluate(&-1), vec!["must be at least 0"]);
    }

    /// Inclusive bound, "less than" wording.
    #[test]
    fn test_max_value_wording() {
        let v = max_value(5_i64, finalize());
        assert!(run(&5, &v).is_ok());
        assert_eq!(run(&42, &v).unwrap_err().into_vec(), vec!["must be less than 5"]);
    }

    #[test]
    fn test_value_range() {
        let v = value_range(-3_i32, 3, finalize());
        assert!(run(&-3, &v).is_ok());
        assert!(run(&3, &v).is_ok());
        assert_eq!(v.evaluate(&4), vec!["must be at least -3 and at most 3"]);
        assert_eq!(v.evaluate(&-4), vec!["must be at least -3 and at most 3"]);
    }

    #[test]
    fn test_equal_and_not_equal() {
        let eq = equal_to(7_u8, finalize());
        let ne = not_equal_to(7_u8, finalize());

        assert!(run(&7, &eq).is_ok());
        assert_eq!(eq.evaluate(&8), vec!["must be equal to: 7"]);
        assert!(run(&8, &ne).is_ok());
        assert_eq!(ne.evaluate(&7), vec!["must not be equal to: 7"]);
    }

    #[test]
    fn test_divisible_by() {
        let v = divisible_by(3_i64, finalize());
        assert!(run(&9, &v).is_ok());
        assert!(run(&0, &v).is_ok());
        assert!(run(&-9, &v).is_ok());
        assert_eq!(v.evaluate(&10), vec!["must be divisible by: 3"]);
    }

    #[test]
    fn test_divisible_by_zero_rejects_everything() {
        let v = divisible_by(0_i64, finalize());
        for value in [0_i64, 1, -1, i64::MAX] {
            assert_eq!(v.evaluate(&value), vec!["must be divisible by: 0"]);
        }
    }

    #[test]
    fn test_divisible_by_minus_one_at_min() {
        let v = divisible_by(-1_i64, finalize());
        assert!(run(&i64::MIN, &v).is_ok());
    }

    #[test]
    fn test_unsigned_and_wide_types() {
        let v = value_range(1_u64, 10, divisible_by(2, finalize()));
        assert!(run(&4_u64, &v).is_ok());
        assert_eq!(
            v.evaluate(&11),
            vec!["must be at least 1 and at most 10", "must be divisible by: 2"]
        );

        let wide = min_value(i128::MAX, finalize());
        assert_eq!(
            wide.evaluate(&0),
            vec!["must be at least 170141183460469231731687303715884105727"]
        );
    }

    /// A value failing every rule gets one message per rule, in order.
    #[test]
    fn test_chain_order() {
        let v = min_value(
            10_i64,
            max_value(-10, equal_to(3, not_equal_to(1, divisible_by(2, finalize())))),
        );

        assert_eq!(
            v.evaluate(&1),
            vec![
                "must be at least 10",
                "must be less than -10",
                "must be equal to: 3",
                "must not be equal to: 1",
                "must be divisible by: 2",
            ]
        );
    }
}
