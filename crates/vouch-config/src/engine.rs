//! Compiling rule set configuration into verifier chains.
//!
//! `RuleSet` loads a `RuleSetConfig` from a TOML string or file and compiles
//! it once, at load time, into a verifier for the configured value kind.
//!
//! Compilation algorithm:
//!
//! 1. Walk the rules from last to first, starting from `finalize()`.
//! 2. Wrap the chain built so far with each rule's constructor. Walking in
//!    reverse makes the first declared rule the outermost link, so messages
//!    come out in declaration order.
//! 3. A rule that does not apply to the kind is a `ConfigError`; a rule with
//!    unusable parameters is an `InvalidRule`. Either aborts the load.

use std::path::Path;

use tracing::{debug, warn};

use vouch_contracts::{RunReport, VouchError, VouchResult};
use vouch_core::{finalize, Verifier};
use vouch_rules::{float, integer, string};

use crate::rule::{Literal, RuleDef, RuleSetConfig, ValueKind};

/// A compiled chain for one of the supported value kinds.
#[derive(Debug, Clone)]
enum Chain {
    String(Verifier<str>),
    Integer(Verifier<i64>),
    Float(Verifier<f64>),
}

/// A rule set loaded from TOML and compiled into a verifier chain.
///
/// ```rust,ignore
/// use vouch_config::RuleSet;
///
/// let rules = RuleSet::from_file(Path::new("rules/username.toml"))?;
/// let report = rules.check("alice")?;
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    config: RuleSetConfig,
    chain: Chain,
}

impl RuleSet {
    /// Parse `s` as TOML and compile it.
    ///
    /// Returns `VouchError::ConfigError` if the TOML is malformed, does not
    /// match the `RuleSetConfig` schema, or uses a rule that does not apply
    /// to the declared kind. Returns `VouchError::InvalidRule` for rules with
    /// unusable parameters.
    pub fn from_toml_str(s: &str) -> VouchResult<Self> {
        let config: RuleSetConfig = toml::from_str(s).map_err(|e| VouchError::ConfigError {
            reason: format!("failed to parse rule set TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML rule set.
    pub fn from_file(path: &Path) -> VouchResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VouchError::ConfigError {
            reason: format!("failed to read rule set file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Compile an already deserialized configuration.
    pub fn from_config(config: RuleSetConfig) -> VouchResult<Self> {
        let chain = match config.kind {
            ValueKind::String => Chain::String(compile(&config.rules, chain_string)?),
            ValueKind::Integer => Chain::Integer(compile(&config.rules, chain_integer)?),
            ValueKind::Float => Chain::Float(compile(&config.rules, chain_float)?),
        };

        debug!(
            kind = %config.kind,
            rule_count = config.rules.len(),
            "rule set compiled"
        );

        Ok(Self { config, chain })
    }

    pub fn kind(&self) -> ValueKind {
        self.config.kind
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[RuleDef] {
        &self.config.rules
    }

    pub fn string_verifier(&self) -> VouchResult<Verifier<str>> {
        match &self.chain {
            Chain::String(v) => Ok(v.clone()),
            _ => Err(self.kind_mismatch(ValueKind::String)),
        }
    }

    pub fn integer_verifier(&self) -> VouchResult<Verifier<i64>> {
        match &self.chain {
            Chain::Integer(v) => Ok(v.clone()),
            _ => Err(self.kind_mismatch(ValueKind::Integer)),
        }
    }

    pub fn float_verifier(&self) -> VouchResult<Verifier<f64>> {
        match &self.chain {
            Chain::Float(v) => Ok(v.clone()),
            _ => Err(self.kind_mismatch(ValueKind::Float)),
        }
    }

    /// Parse `raw` as the configured kind and run the chain against it.
    ///
    /// A rejected value is not an error here: it comes back as a report with
    /// `passed = false`. Only input that cannot be parsed as the kind
    /// produces `VouchError::ConfigError`.
    pub fn check(&self, raw: &str) -> VouchResult<RunReport> {
        let report = match &self.chain {
            Chain::String(v) => v.report(raw),
            Chain::Integer(v) => {
                let value: i64 = raw.trim().parse().map_err(|e| VouchError::ConfigError {
                    reason: format!("'{raw}' is not a valid integer: {e}"),
                })?;
                v.report(&value)
            }
            Chain::Float(v) => {
                let value: f64 = raw.trim().parse().map_err(|e| VouchError::ConfigError {
                    reason: format!("'{raw}' is not a valid float: {e}"),
                })?;
                v.report(&value)
            }
        };

        debug!(
            kind = %self.config.kind,
            passed = report.passed,
            violation_count = report.violations.len(),
            "rule set checked"
        );

        Ok(report)
    }

    fn kind_mismatch(&self, requested: ValueKind) -> VouchError {
        VouchError::ConfigError {
            reason: format!(
                "rule set verifies {} values, not {} values",
                self.config.kind, requested
            ),
        }
    }
}

// ── Compilation ───────────────────────────────────────────────────────────────

type ChainFn<T> = fn(&RuleDef, Verifier<T>) -> VouchResult<Verifier<T>>;

fn compile<T: ?Sized + 'static>(rules: &[RuleDef], link: ChainFn<T>) -> VouchResult<Verifier<T>> {
    rules.iter().rev().try_fold(finalize(), |next, rule| {
        link(rule, next).inspect_err(|e| {
            warn!(rule = rule.name(), error = %e, "rule set rejected");
        })
    })
}

fn not_applicable(rule: &RuleDef, kind: ValueKind) -> VouchError {
    VouchError::ConfigError {
        reason: format!("rule '{}' does not apply to {} values", rule.name(), kind),
    }
}

fn invalid(rule: &RuleDef, reason: impl Into<String>) -> VouchError {
    VouchError::InvalidRule {
        rule: rule.name().to_string(),
        reason: reason.into(),
    }
}

/// Convert one-character strings into `char`s.
fn single_chars(rule: &RuleDef, entries: &[String]) -> VouchResult<Vec<char>> {
    entries
        .iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(invalid(
                    rule,
                    format!("character set entry {entry:?} must be exactly one character"),
                )),
            }
        })
        .collect()
}

fn chain_string(rule: &RuleDef, next: Verifier<str>) -> VouchResult<Verifier<str>> {
    let text = |value: &Literal| {
        value
            .as_text()
            .map(str::to_owned)
            .ok_or_else(|| invalid(rule, format!("expected a string, found {value}")))
    };

    Ok(match rule {
        RuleDef::MinLength { n } => string::min_length(*n, next),
        RuleDef::MaxLength { n } => string::max_length(*n, next),
        RuleDef::ExactLength { n } => string::exact_length(*n, next),
        RuleDef::LengthRange { min, max } => {
            if min > max {
                return Err(invalid(rule, format!("min {min} is greater than max {max}")));
            }
            string::length_range(*min, *max, next)
        }
        RuleDef::NotEmpty => string::not_empty(next),
        RuleDef::AllowedCharacters { chars } => {
            string::allowed_characters(single_chars(rule, chars)?, next)
        }
        RuleDef::DisallowedCharacters { chars } => {
            string::disallowed_characters(single_chars(rule, chars)?, next)
        }
        RuleDef::StartsWith { prefix } => string::starts_with(prefix.as_str(), next),
        RuleDef::EndsWith { suffix } => string::ends_with(suffix.as_str(), next),
        RuleDef::Contains { value } => string::contains(value.as_str(), next),
        RuleDef::DoesNotContain { value } => string::does_not_contain(value.as_str(), next),
        RuleDef::EqualTo { value } => string::equal_to(text(value)?, next),
        RuleDef::NotEqualTo { value } => string::not_equal_to(text(value)?, next),
        RuleDef::MinValue { .. }
        | RuleDef::MaxValue { .. }
        | RuleDef::ValueRange { .. }
        | RuleDef::DivisibleBy { .. } => return Err(not_applicable(rule, ValueKind::String)),
    })
}

fn chain_integer(rule: &RuleDef, next: Verifier<i64>) -> VouchResult<Verifier<i64>> {
    let int = |value: &Literal| {
        value
            .as_integer()
            .ok_or_else(|| invalid(rule, format!("expected an integer, found {value}")))
    };

    Ok(match rule {
        RuleDef::MinValue { value } => integer::min_value(int(value)?, next),
        RuleDef::MaxValue { value } => integer::max_value(int(value)?, next),
        RuleDef::ValueRange { min, max } => {
            let (min, max) = (int(min)?, int(max)?);
            if min > max {
                return Err(invalid(rule, format!("min {min} is greater than max {max}")));
            }
            integer::value_range(min, max, next)
        }
        RuleDef::DivisibleBy { divisor } => {
            let divisor = int(divisor)?;
            if divisor == 0 {
                return Err(invalid(rule, "divisor must not be zero"));
            }
            integer::divisible_by(divisor, next)
        }
        RuleDef::EqualTo { value } => integer::equal_to(int(value)?, next),
        RuleDef::NotEqualTo { value } => integer::not_equal_to(int(value)?, next),
        _ => return Err(not_applicable(rule, ValueKind::Integer)),
    })
}

fn chain_float(rule: &RuleDef, next: Verifier<f64>) -> VouchResult<Verifier<f64>> {
    let num = |value: &Literal| match value {
        Literal::Integer(n) if (*n as f64) as i128 != i128::from(*n) => Err(invalid(
            rule,
            format!("integer {n} cannot be represented exactly as a float"),
        )),
        _ => value
            .as_float()
            .ok_or_else(|| invalid(rule, format!("expected a number, found {value}"))),
    };

    Ok(match rule {
        RuleDef::MinValue { value } => float::min_value(num(value)?, next),
        RuleDef::MaxValue { value } => float::max_value(num(value)?, next),
        RuleDef::ValueRange { min, max } => {
            let (min, max) = (num(min)?, num(max)?);
            if min.is_nan() || max.is_nan() || min > max {
                return Err(invalid(
                    rule,
                    format!("min {min} and max {max} do not form a range"),
                ));
            }
            float::value_range(min, max, next)
        }
        RuleDef::DivisibleBy { divisor } => float::divisible_by(num(divisor)?, next),
        RuleDef::EqualTo { value } => float::equal_to(num(value)?, next),
        RuleDef::NotEqualTo { value } => float::not_equal_to(num(value)?, next),
        _ => return Err(not_applicable(rule, ValueKind::Float)),
    })
}
