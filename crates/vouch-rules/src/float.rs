//! Float rules.
//!
//! Same shapes as the integer rules, over `f32` and `f64`. Comparisons are
//! exact (`==`, no epsilon), values render with a decimal point (`42.0`),
//! and NaN fails every ordering and equality check.

use tracing::warn;

use vouch_core::Verifier;

use crate::number::{DivisibleBy, EqualTo, Float, MaxValue, MinValue, NotEqualTo, ValueRange};

/// `value >= min`.
pub fn min_value<N: Float>(min: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(MinValue::new(min), next)
}

/// `value <= max`, reported as "must be less than MAX".
pub fn max_value<N: Float>(max: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(MaxValue::new(max), next)
}

/// `min <= value <= max`.
pub fn value_range<N: Float>(min: N, max: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(ValueRange::new(min, max), next)
}

pub fn equal_to<N: Float>(expected: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(EqualTo::new(expected), next)
}

pub fn not_equal_to<N: Float>(rejected: N, next: Verifier<N>) -> Verifier<N> {
    Verifier::rule(NotEqualTo::new(rejected), next)
}

/// `value % divisor == 0.0`.
///
/// When the remainder is undefined (zero divisor, NaN or infinite value) the
/// value counts as not divisible.
pub fn divisible_by<N: Float>(divisor: N, next: Verifier<N>) -> Verifier<N> {
    if divisor.is_zero() {
        warn!(rule = "divisible-by", "zero divisor: every value will be rejected");
    }
    Verifier::rule(DivisibleBy::new(divisor), next)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
