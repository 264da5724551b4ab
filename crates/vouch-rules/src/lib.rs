//! # vouch-rules
//!
//! The built-in rule catalog for vouch verifier chains.
//!
//! Rules are grouped by the kind of value they verify:
//!
//! - [`string`]: lengths (in characters), character sets, prefixes and
//!   suffixes, substrings, equality
//! - [`integer`]: bounds, ranges, equality, divisibility over every primitive
//!   integer type
//! - [`float`]: the same over `f32` and `f64`, with exact comparisons
//!
//! Every constructor takes its parameters followed by `next`, the rest of the
//! chain, and returns a new verifier. The chain is read top-down and ends in
//! [`finalize`]:
//!
//! ```rust,ignore
//! use vouch_rules::{finalize, run, string};
//!
//! let username = string::not_empty(
//!     string::max_length(16, string::allowed_characters('a'..='z', finalize())),
//! );
//! assert!(run("alice", &username).is_ok());
//! ```
//!
//! Rules never short-circuit. A value that breaks three rules gets three
//! messages, in the order the rules were written.

pub mod float;
pub mod integer;
pub mod number;
pub mod string;

pub use number::{Float, Integer, Number};
pub use vouch_contracts::{RunReport, Violations};
pub use vouch_core::{custom, finalize, run, Rule, Verifier};

// ── Tests ─────────────────────────────────────────────────────────────────────
