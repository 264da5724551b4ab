//! Rule set configuration schema.
//!
//! A `RuleSetConfig` is deserialized from TOML. It names the kind of value
//! the set verifies and holds an ordered list of `RuleDef`s. Rules are
//! chained in declaration order, so violation messages come out in the same
//! order the rules appear in the file.

use std::fmt;

use serde::{Deserialize, Serialize};

use vouch_rules::Number;

/// The kind of value a rule set verifies.
///
/// ```toml
/// kind = "string"
/// kind = "integer"
/// kind = "float"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    String,
    Integer,
    Float,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        })
    }
}

/// A rule parameter that may be text or a number, depending on the kind.
///
/// TOML integers become `Integer`; they are accepted wherever a float is
/// expected too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Literal::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Literal::Integer(n) => Some(*n as f64),
            Literal::Float(x) => Some(*x),
            Literal::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Float(x) => f.write_str(&x.render()),
            Literal::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// A single rule loaded from TOML, tagged by its kebab-case `rule` name.
///
/// ```toml
/// [[rules]]
/// rule = "length-range"
/// min = 3
/// max = 16
///
/// [[rules]]
/// rule = "allowed-characters"
/// chars = ["a", "b", "c"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum RuleDef {
    // String rules.
    MinLength { n: usize },
    MaxLength { n: usize },
    ExactLength { n: usize },
    LengthRange { min: usize, max: usize },
    NotEmpty,
    /// Each entry must be exactly one character.
    AllowedCharacters { chars: Vec<String> },
    DisallowedCharacters { chars: Vec<String> },
    StartsWith { prefix: String },
    EndsWith { suffix: String },
    Contains { value: String },
    DoesNotContain { value: String },

    // Numeric rules.
    MinValue { value: Literal },
    MaxValue { value: Literal },
    ValueRange { min: Literal, max: Literal },
    DivisibleBy { divisor: Literal },

    // Shared by every kind.
    EqualTo { value: Literal },
    NotEqualTo { value: Literal },
}

impl RuleDef {
    /// The rule's kebab-case name, as written in TOML.
    pub fn name(&self) -> &'static str {
        match self {
            RuleDef::MinLength { .. } => "min-length",
            RuleDef::MaxLength { .. } => "max-length",
            RuleDef::ExactLength { .. } => "exact-length",
            RuleDef::LengthRange { .. } => "length-range",
            RuleDef::NotEmpty => "not-empty",
            RuleDef::AllowedCharacters { .. } => "allowed-characters",
            RuleDef::DisallowedCharacters { .. } => "disallowed-characters",
            RuleDef::StartsWith { .. } => "starts-with",
            RuleDef::EndsWith { .. } => "ends-with",
            RuleDef::Contains { .. } => "contains",
            RuleDef::DoesNotContain { .. } => "does-not-contain",
            RuleDef::MinValue { .. } => "min-value",
            RuleDef::MaxValue { .. } => "max-value",
            RuleDef::ValueRange { .. } => "value-range",
            RuleDef::DivisibleBy { .. } => "divisible-by",
            RuleDef::EqualTo { .. } => "equal-to",
            RuleDef::NotEqualTo { .. } => "not-equal-to",
        }
    }
}

impl fmt::Display for RuleDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            RuleDef::MinLength { n } | RuleDef::MaxLength { n } | RuleDef::ExactLength { n } => {
                write!(f, "{name} n={n}")
            }
            RuleDef::LengthRange { min, max } => write!(f, "{name} min={min} max={max}"),
            RuleDef::NotEmpty => f.write_str(name),
            RuleDef::AllowedCharacters { chars } | RuleDef::DisallowedCharacters { chars } => {
                write!(f, "{name} chars={chars:?}")
            }
            RuleDef::StartsWith { prefix } => write!(f, "{name} prefix={prefix:?}"),
            RuleDef::EndsWith { suffix } => write!(f, "{name} suffix={suffix:?}"),
            RuleDef::Contains { value } | RuleDef::DoesNotContain { value } => {
                write!(f, "{name} value={value:?}")
            }
            RuleDef::MinValue { value }
            | RuleDef::MaxValue { value }
            | RuleDef::EqualTo { value }
            | RuleDef::NotEqualTo { value } => write!(f, "{name} value={value}"),
            RuleDef::ValueRange { min, max } => write!(f, "{name} min={min} max={max}"),
            RuleDef::DivisibleBy { divisor } => write!(f, "{name} divisor={divisor}"),
        }
    }
}

/// The top-level structure deserialized from a TOML rule set file.
///
/// ```toml
/// kind = "integer"
///
/// [[rules]]
/// rule = "min-value"
/// value = 0
///
/// [[rules]]
/// rule = "divisible-by"
/// divisor = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// The kind of value every rule in the set applies to.
    pub kind: ValueKind,
    /// Ordered list of rules. An empty list accepts everything.
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}
