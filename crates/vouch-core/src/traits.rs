//! The rule trait every catalog entry implements.
//!
//! A rule is one predicate paired with one message template. It knows
//! nothing about chaining: [`Verifier::rule`](crate::Verifier::rule) wraps a
//! rule together with the rest of the chain and applies the shared
//! check / continue / prepend pattern.

/// A single predicate over values of type `T`.
///
/// Implementations must be pure and total: `holds` may not panic, loop, or
/// observe anything besides `value` and the rule's own parameters.
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Stable kebab-case name, used in trace output and rule listings.
    fn name(&self) -> &'static str;

    /// Return true if `value` satisfies the rule.
    fn holds(&self, value: &T) -> bool;

    /// The message reported when `holds` returns false.
    ///
    /// Only called on failure, so implementations are free to format
    /// eagerly here.
    fn message(&self) -> String;
}
