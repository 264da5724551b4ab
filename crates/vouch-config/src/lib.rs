//! # vouch-config
//!
//! Declarative rule sets for vouch, loaded from TOML.
//!
//! ## Overview
//!
//! This crate provides [`RuleSet`], which compiles a TOML rule set into a
//! verifier chain built from the `vouch-rules` catalog. A rule set names
//! the kind of value it verifies and lists its rules in order; violations
//! are reported in that order.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use vouch_config::RuleSet;
//!
//! let rules = RuleSet::from_toml_str(r#"
//!     kind = "string"
//!
//!     [[rules]]
//!     rule = "not-empty"
//!
//!     [[rules]]
//!     rule = "max-length"
//!     n = 16
//! "#)?;
//! let verifier = rules.string_verifier()?;
//! ```
//!
//! Rules are validated when the set is loaded: a rule that does not apply to
//! the declared kind, or carries unusable parameters (an integer divisor of
//! zero, a range whose minimum exceeds its maximum), fails the load.

pub mod engine;
pub mod rule;

pub use engine::RuleSet;
pub use rule::{Literal, RuleDef, RuleSetConfig, ValueKind};

// ── Tests ─────────────────────────────────────────────────────────────────────
