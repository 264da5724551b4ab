//! # vouch-contracts
//!
//! Shared types for the vouch verifier crates.
//!
//! All crates in the workspace import from here. No validation logic lives
//! in this crate: only the violation list, the run report, and error types.

pub mod error;
pub mod violations;

pub use error::{VouchError, VouchResult};
pub use violations::{RunReport, Violations};

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ── Violations ───────────────────────────────────────────────────────────

    #[test]
    fn violations_reject_empty_list() {
        assert!(Violations::new(Vec::new()).is_none());
    }

    #[test]
    fn violations_preserve_order() {
        let v = Violations::new(msgs(&["first", "second", "third"])).unwrap();
        assert_eq!(v.messages(), &msgs(&["first", "second", "third"])[..]);
        assert_eq!(v.first().map(String::as_str), Some("first"));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn violations_display_joins_messages() {
        let v = Violations::new(msgs(&["must not be empty", "must be at least 0"])).unwrap();
        assert_eq!(v.to_string(), "must not be empty; must be at least 0");
    }

    #[test]
    fn violations_deserialize_refuses_empty_array() {
        let result: Result<Violations, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let v: Violations = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(v.into_vec(), msgs(&["a", "b"]));
    }

    // ── RunReport ────────────────────────────────────────────────────────────

    #[test]
    fn report_passed_tracks_emptiness() {
        assert!(RunReport::from_messages(Vec::new()).passed);
        assert!(!RunReport::from_messages(msgs(&["x"])).passed);
    }

    #[test]
    fn report_into_result() {
        assert_eq!(RunReport::from_messages(Vec::new()).into_result(), Ok(()));

        let err = RunReport::from_messages(msgs(&["x", "y"]))
            .into_result()
            .unwrap_err();
        assert_eq!(err.messages(), &msgs(&["x", "y"])[..]);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = RunReport::from_messages(msgs(&["must not be empty"]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "passed": false, "violations": ["must not be empty"] })
        );
    }

    #[test]
    fn report_deserialize_checks_passed_flag() {
        let ok: RunReport =
            serde_json::from_str(r#"{"passed":false,"violations":["x"]}"#).unwrap();
        assert_eq!(ok, RunReport::from_messages(msgs(&["x"])));

        let passed: RunReport = serde_json::from_str(r#"{"passed":true,"violations":[]}"#).unwrap();
        assert!(passed.passed);

        let lying: Result<RunReport, _> =
            serde_json::from_str(r#"{"passed":true,"violations":["x"]}"#);
        assert!(lying.is_err());

        let empty_failure: Result<RunReport, _> =
            serde_json::from_str(r#"{"passed":false,"violations":[]}"#);
        assert!(empty_failure.is_err());
    }

    // ── VouchError display messages ──────────────────────────────────────────

    #[test]
    fn error_rejected_display() {
        let violations = Violations::new(msgs(&["must be less than 5"])).unwrap();
        let err = VouchError::from(violations);
        let msg = err.to_string();
        assert!(msg.contains("verification rejected"));
        assert!(msg.contains("must be less than 5"));
    }

    #[test]
    fn error_config_error_display() {
        let err = VouchError::ConfigError {
            reason: "unknown kind".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("unknown kind"));
    }

    #[test]
    fn error_invalid_rule_display() {
        let err = VouchError::InvalidRule {
            rule: "divisible-by".to_string(),
            reason: "divisor must not be zero".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("divisible-by"));
        assert!(msg.contains("divisor must not be zero"));
    }
}
