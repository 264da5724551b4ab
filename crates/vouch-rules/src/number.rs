//! Numeric value kinds and the rules shared by integers and floats.
//!
//! Integer and float rules have the same predicates and message shapes; they
//! differ only in how values are rendered and how divisibility is decided.
//! Both live behind the sealed [`Number`] trait, and the public constructors
//! in [`crate::integer`] and [`crate::float`] restrict each catalog to its own
//! kind at compile time.

use vouch_core::Rule;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type rules can be declared over.
pub trait Number: sealed::Sealed + Copy + PartialOrd + Send + Sync + 'static {
    /// Canonical decimal rendering used in messages.
    fn render(self) -> String;

    fn is_zero(self) -> bool;

    /// True if `self` is an exact multiple of `divisor`.
    ///
    /// A zero divisor is never satisfied.
    fn is_divisible_by(self, divisor: Self) -> bool;
}

/// Primitive integer types.
pub trait Integer: Number {}

/// Primitive floating-point types.
pub trait Float: Number {}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Number for $t {
            fn render(self) -> String {
                self.to_string()
            }

            fn is_zero(self) -> bool {
                self == 0
            }

            fn is_divisible_by(self, divisor: Self) -> bool {
                // wrapping_rem so that MIN % -1 is 0 instead of an overflow.
                divisor != 0 && self.wrapping_rem(divisor) == 0
            }
        }

        impl Integer for $t {}
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Number for $t {
            fn render(self) -> String {
                let rendered = self.to_string();
                if self.is_finite() && !rendered.contains('.') {
                    format!("{rendered}.0")
                } else {
                    rendered
                }
            }

            fn is_zero(self) -> bool {
                self == 0.0
            }

            fn is_divisible_by(self, divisor: Self) -> bool {
                // x % 0.0 is NaN, which compares unequal to zero.
                self % divisor == 0.0
            }
        }

        impl Float for $t {}
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

// ── Rules ─────────────────────────────────────────────────────────────────────

/// `value >= min`.
#[derive(Debug, Clone, Copy)]
pub struct MinValue<N> {
    min: N,
}

impl<N: Number> MinValue<N> {
    pub fn new(min: N) -> Self {
        Self { min }
    }
}

impl<N: Number> Rule<N> for MinValue<N> {
    fn name(&self) -> &'static str {
        "min-value"
    }

    fn holds(&self, value: &N) -> bool {
        *value >= self.min
    }

    fn message(&self) -> String {
        format!("must be at least {}", self.min.render())
    }
}

/// `value <= max`.
///
/// The message reads "less than" although the bound is inclusive; callers
/// match on this text, so it stays.
#[derive(Debug, Clone, Copy)]
pub struct MaxValue<N> {
    max: N,
}

impl<N: Number> MaxValue<N> {
    pub fn new(max: N) -> Self {
        Self { max }
    }
}

impl<N: Number> Rule<N> for MaxValue<N> {
    fn name(&self) -> &'static str {
        "max-value"
    }

    fn holds(&self, value: &N) -> bool {
        *value <= self.max
    }

    fn message(&self) -> String {
        format!("must be less than {}", self.max.render())
    }
}

/// `min <= value <= max`.
#[derive(Debug, Clone, Copy)]
pub struct ValueRange<N> {
    min: N,
    max: N,
}

impl<N: Number> ValueRange<N> {
    pub fn new(min: N, max: N) -> Self {
        Self { min, max }
    }
}

impl<N: Number> Rule<N> for ValueRange<N> {
    fn name(&self) -> &'static str {
        "value-range"
    }

    fn holds(&self, value: &N) -> bool {
        *value >= self.min && *value <= self.max
    }

    fn message(&self) -> String {
        format!(
            "must be at least {} and at most {}",
            self.min.render(),
            self.max.render()
        )
    }
}

/// `value == expected`, compared exactly.
#[derive(Debug, Clone, Copy)]
pub struct EqualTo<N> {
    expected: N,
}

impl<N: Number> EqualTo<N> {
    pub fn new(expected: N) -> Self {
        Self { expected }
    }
}

impl<N: Number> Rule<N> for EqualTo<N> {
    fn name(&self) -> &'static str {
        "equal-to"
    }

    fn holds(&self, value: &N) -> bool {
        *value == self.expected
    }

    fn message(&self) -> String {
        format!("must be equal to: {}", self.expected.render())
    }
}

/// `value != rejected`, compared exactly.
#[derive(Debug, Clone, Copy)]
pub struct NotEqualTo<N> {
    rejected: N,
}

impl<N: Number> NotEqualTo<N> {
    pub fn new(rejected: N) -> Self {
        Self { rejected }
    }
}

impl<N: Number> Rule<N> for NotEqualTo<N> {
    fn name(&self) -> &'static str {
        "not-equal-to"
    }

    fn holds(&self, value: &N) -> bool {
        *value != self.rejected
    }

    fn message(&self) -> String {
        format!("must not be equal to: {}", self.rejected.render())
    }
}

/// `value` is an exact multiple of `divisor`. A zero divisor always fails.
#[derive(Debug, Clone, Copy)]
pub struct DivisibleBy<N> {
    divisor: N,
}

impl<N: Number> DivisibleBy<N> {
    pub fn new(divisor: N) -> Self {
        Self { divisor }
    }
}

impl<N: Number> Rule<N> for DivisibleBy<N> {
    fn name(&self) -> &'static str {
        "divisible-by"
    }

    fn holds(&self, value: &N) -> bool {
        value.is_divisible_by(self.divisor)
    }

    fn message(&self) -> String {
        format!("must be divisible by: {}", self.divisor.render())
    }
}
