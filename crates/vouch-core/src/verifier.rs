//! Verifier chains and the run entry point.
//!
//! A [`Verifier<T>`] is a pure function from `&T` to an ordered sequence of
//! violation messages. Chains are built inside-out: the tail is constructed
//! first ([`finalize`]), then each rule or [`custom`] check wraps the chain
//! built so far. Evaluation of a link always evaluates its continuation,
//! whether or not the link's own check passed, and places the link's own
//! messages in front of the continuation's. The result is that messages come
//! out in declaration order and a run reports every failing rule at once.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use vouch_contracts::{RunReport, Violations};

use crate::traits::Rule;

type EvalFn<T> = dyn Fn(&T) -> Vec<String> + Send + Sync;

/// An immutable, shareable chain of checks over values of type `T`.
///
/// Cloning is cheap and shares the underlying chain. A verifier holds no
/// mutable state, so it can be evaluated any number of times, from any
/// number of threads.
pub struct Verifier<T: ?Sized> {
    eval: Arc<EvalFn<T>>,
}

impl<T: ?Sized + 'static> Verifier<T> {
    /// Wrap a raw evaluation function.
    ///
    /// `f` must be pure and total. Prefer [`custom`] or [`Verifier::rule`],
    /// which take care of continuation ordering; `from_fn` is the primitive
    /// both are built on.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        Self { eval: Arc::new(f) }
    }

    /// Chain `rule` in front of `next`.
    ///
    /// On evaluation the rule's predicate is checked, `next` is evaluated
    /// against the same value, and if the predicate failed the rule's message
    /// is prepended to whatever `next` reported.
    pub fn rule<R>(rule: R, next: Verifier<T>) -> Self
    where
        R: Rule<T> + 'static,
    {
        Self::from_fn(move |value| {
            let holds = rule.holds(value);
            let mut messages = next.evaluate(value);
            if !holds {
                let message = rule.message();
                trace!(rule = rule.name(), %message, "rule failed");
                messages.insert(0, message);
            }
            messages
        })
    }

    /// Evaluate the chain and return every message it produced.
    ///
    /// An empty vector means the value was accepted.
    pub fn evaluate(&self, value: &T) -> Vec<String> {
        (self.eval)(value)
    }

    /// Method form of [`run`].
    pub fn run<'a>(&self, value: &'a T) -> Result<&'a T, Violations> {
        run(value, self)
    }

    /// Evaluate the chain into a serializable [`RunReport`].
    pub fn report(&self, value: &T) -> RunReport {
        RunReport::from_messages(self.evaluate(value))
    }
}

impl<T: ?Sized> Clone for Verifier<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T: ?Sized + 'static> Default for Verifier<T> {
    fn default() -> Self {
        finalize()
    }
}

impl<T: ?Sized> fmt::Debug for Verifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier").finish_non_exhaustive()
    }
}

/// The chain terminator: accepts every value.
///
/// `finalize` is the identity element of message accumulation, so it is
/// both the innermost link of every chain and a valid verifier on its own.
pub fn finalize<T: ?Sized + 'static>() -> Verifier<T> {
    Verifier::from_fn(|_| Vec::new())
}

/// Build a link from a hand-written check.
///
/// `check` runs first; `next` is evaluated against the same value whatever
/// `check` returned, and `check`'s messages are placed before `next`'s. An
/// `Err` with no messages contributes nothing.
///
/// This is the way to verify composite values: run one sub-verifier per
/// field inside `check` and return the concatenated messages.
pub fn custom<T, F>(check: F, next: Verifier<T>) -> Verifier<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> Result<(), Vec<String>> + Send + Sync + 'static,
{
    Verifier::from_fn(move |value| {
        let own = check(value);
        let tail = next.evaluate(value);
        match own {
            Ok(()) => tail,
            Err(mut messages) => {
                messages.extend(tail);
                messages
            }
        }
    })
}

/// Run `verifier` against `data`.
///
/// Returns `Ok(data)` when no rule reported anything, otherwise the full,
/// ordered list of violations. Evaluation never short-circuits.
pub fn run<'a, T: ?Sized + 'static>(
    data: &'a T,
    verifier: &Verifier<T>,
) -> Result<&'a T, Violations> {
    let messages = verifier.evaluate(data);
    match Violations::new(messages) {
        None => {
            debug!(passed = true, violation_count = 0, "verification complete");
            Ok(data)
        }
        Some(violations) => {
            debug!(
                passed = false,
                violation_count = violations.len(),
                "verification complete"
            );
            Err(violations)
        }
    }
}
