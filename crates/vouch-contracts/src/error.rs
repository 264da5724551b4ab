//! Error types for the vouch library.
//!
//! Rule evaluation itself never fails: a rejected run is data
//! ([`Violations`]), not an error. `VouchError` exists for the places where
//! callers want to propagate a rejection with `?`, and for the configuration
//! layer, which can fail while loading or compiling a rule set.

use thiserror::Error;

use crate::violations::Violations;

/// The unified error type for the vouch crates.
#[derive(Debug, Error)]
pub enum VouchError {
    /// A verifier run rejected its input.
    #[error("verification rejected: {violations}")]
    Rejected { violations: Violations },

    /// A rule set document is missing, malformed, or does not fit the value
    /// kind it is being compiled for.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A rule definition carries parameters the rule cannot work with.
    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },
}

impl From<Violations> for VouchError {
    fn from(violations: Violations) -> Self {
        VouchError::Rejected { violations }
    }
}

/// Convenience alias used throughout the vouch crates.
pub type VouchResult<T> = Result<T, VouchError>;
