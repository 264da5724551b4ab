//! Violation lists and run reports.
//!
//! A rejected run always carries at least one message, in the order the
//! failing rules were declared. `Violations` enforces the non-empty part of
//! that contract at construction; ordering is the verifier chain's job.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// An ordered, non-empty list of human-readable violation messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Violations(Vec<String>);

impl Violations {
    /// Wrap `messages`, or return `None` if there are none.
    pub fn new(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    /// The messages in declaration order.
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Violations {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Violations> for Vec<String> {
    fn from(violations: Violations) -> Self {
        violations.0
    }
}

impl TryFrom<Vec<String>> for Violations {
    type Error = &'static str;

    fn try_from(messages: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(messages).ok_or("violation list must not be empty")
    }
}

/// Serializable summary of a single verifier run.
///
/// Mirrors the shape of a run result for tooling that wants to log or emit
/// it: `passed` is true exactly when `violations` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRunReport")]
pub struct RunReport {
    /// True only if every rule in the chain accepted the value.
    pub passed: bool,
    /// All messages produced by the run, in declaration order. Empty on pass.
    pub violations: Vec<String>,
}

impl RunReport {
    /// Build a report from the raw message sequence of an evaluation.
    pub fn from_messages(violations: Vec<String>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    /// Convert back into the accept/reject shape of a run.
    pub fn into_result(self) -> Result<(), Violations> {
        match Violations::new(self.violations) {
            None => Ok(()),
            Some(violations) => Err(violations),
        }
    }
}

/// Wire shape of a `RunReport`, checked before it becomes one.
#[derive(Deserialize)]
struct RawRunReport {
    passed: bool,
    violations: Vec<String>,
}

impl TryFrom<RawRunReport> for RunReport {
    type Error = &'static str;

    fn try_from(raw: RawRunReport) -> Result<Self, Self::Error> {
        if raw.passed != raw.violations.is_empty() {
            return Err("report must pass exactly when it lists no violations");
        }
        Ok(Self::from_messages(raw.violations))
    }
}
