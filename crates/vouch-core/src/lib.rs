//! # vouch-core
//!
//! Composable verifier chains.
//!
//! This crate provides:
//! - [`Verifier<T>`], an immutable chain of checks over values of type `T`
//! - the chain primitives [`finalize`] and [`custom`], and the [`Rule`] trait
//!   catalog rules implement
//! - [`run`], which turns a chain's messages into accept / reject
//!
//! Every link in a chain evaluates the rest of the chain regardless of its
//! own outcome, so a rejected run lists every failing rule, in the order the
//! rules were declared.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vouch_core::{custom, finalize, run};
//!
//! let not_blank = custom(
//!     |s: &str| if s.trim().is_empty() { Err(vec!["must not be blank".into()]) } else { Ok(()) },
//!     finalize(),
//! );
//! assert!(run("  ", &not_blank).is_err());
//! ```

pub mod traits;
pub mod verifier;

pub use traits::Rule;
pub use verifier::{custom, finalize, run, Verifier};

// ── Tests ─────────────────────────────────────────────────────────────────────
