//! String rules.
//!
//! Every rule here verifies `str` values. Lengths are counted in `char`s
//! (Unicode scalar values), not bytes, so `"héllo"` has length 5. Substring
//! and equality rules are exact and case-sensitive.

use tracing::warn;

use vouch_core::{Rule, Verifier};

/// Render a character set as `"a", "b", "c"`, preserving the given order.
fn quote_set(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// ── Length rules ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    n: usize,
}

impl Rule<str> for MinLength {
    fn name(&self) -> &'static str {
        "min-length"
    }

    fn holds(&self, value: &str) -> bool {
        char_len(value) >= self.n
    }

    fn message(&self) -> String {
        format!("must be at least {} characters long", self.n)
    }
}

/// Inclusive upper bound, reported as "less than" like the numeric rule.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    n: usize,
}

impl Rule<str> for MaxLength {
    fn name(&self) -> &'static str {
        "max-length"
    }

    fn holds(&self, value: &str) -> bool {
        char_len(value) <= self.n
    }

    fn message(&self) -> String {
        format!("must be less than {} characters long", self.n)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExactLength {
    n: usize,
}

impl Rule<str> for ExactLength {
    fn name(&self) -> &'static str {
        "exact-length"
    }

    fn holds(&self, value: &str) -> bool {
        char_len(value) == self.n
    }

    fn message(&self) -> String {
        format!("must be exactly {} characters long", self.n)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl Rule<str> for LengthRange {
    fn name(&self) -> &'static str {
        "length-range"
    }

    fn holds(&self, value: &str) -> bool {
        let len = char_len(value);
        self.min <= len && len <= self.max
    }

    fn message(&self) -> String {
        format!(
            "must be at least {} characters long and at most {} characters long",
            self.min, self.max
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotEmpty;

impl Rule<str> for NotEmpty {
    fn name(&self) -> &'static str {
        "not-empty"
    }

    fn holds(&self, value: &str) -> bool {
        !value.is_empty()
    }

    fn message(&self) -> String {
        "must not be empty".to_string()
    }
}

// ── Character set rules ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AllowedCharacters {
    allowed: Vec<char>,
}

impl Rule<str> for AllowedCharacters {
    fn name(&self) -> &'static str {
        "allowed-characters"
    }

    fn holds(&self, value: &str) -> bool {
        value.chars().all(|c| self.allowed.contains(&c))
    }

    fn message(&self) -> String {
        format!(
            "must only contain the following characters: {}",
            quote_set(&self.allowed)
        )
    }
}

#[derive(Debug, Clone)]
pub struct DisallowedCharacters {
    forbidden: Vec<char>,
}

impl Rule<str> for DisallowedCharacters {
    fn name(&self) -> &'static str {
        "disallowed-characters"
    }

    fn holds(&self, value: &str) -> bool {
        !value.chars().any(|c| self.forbidden.contains(&c))
    }

    fn message(&self) -> String {
        format!(
            "must not contain the following characters: {}",
            quote_set(&self.forbidden)
        )
    }
}

// ── Content rules ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StartsWith {
    prefix: String,
}

impl Rule<str> for StartsWith {
    fn name(&self) -> &'static str {
        "starts-with"
    }

    fn holds(&self, value: &str) -> bool {
        value.starts_with(self.prefix.as_str())
    }

    fn message(&self) -> String {
        format!("must start with: \"{}\"", self.prefix)
    }
}

#[derive(Debug, Clone)]
pub struct EndsWith {
    suffix: String,
}

impl Rule<str> for EndsWith {
    fn name(&self) -> &'static str {
        "ends-with"
    }

    fn holds(&self, value: &str) -> bool {
        value.ends_with(self.suffix.as_str())
    }

    fn message(&self) -> String {
        format!("must end with: \"{}\"", self.suffix)
    }
}

#[derive(Debug, Clone)]
pub struct Contains {
    needle: String,
}

impl Rule<str> for Contains {
    fn name(&self) -> &'static str {
        "contains"
    }

    fn holds(&self, value: &str) -> bool {
        value.contains(self.needle.as_str())
    }

    fn message(&self) -> String {
        format!("must contain: \"{}\"", self.needle)
    }
}

#[derive(Debug, Clone)]
pub struct DoesNotContain {
    needle: String,
}

impl Rule<str> for DoesNotContain {
    fn name(&self) -> &'static str {
        "does-not-contain"
    }

    fn holds(&self, value: &str) -> bool {
        !value.contains(self.needle.as_str())
    }

    fn message(&self) -> String {
        format!("must not contain: \"{}\"", self.needle)
    }
}

#[derive(Debug, Clone)]
pub struct EqualTo {
    expected: String,
}

impl Rule<str> for EqualTo {
    fn name(&self) -> &'static str {
        "equal-to"
    }

    fn holds(&self, value: &str) -> bool {
        value == self.expected
    }

    fn message(&self) -> String {
        format!("must be equal to: \"{}\"", self.expected)
    }
}

#[derive(Debug, Clone)]
pub struct NotEqualTo {
    rejected: String,
}

impl Rule<str> for NotEqualTo {
    fn name(&self) -> &'static str {
        "not-equal-to"
    }

    fn holds(&self, value: &str) -> bool {
        value != self.rejected
    }

    fn message(&self) -> String {
        format!("must not be equal to: \"{}\"", self.rejected)
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// At least `n` characters.
pub fn min_length(n: usize, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(MinLength { n }, next)
}

/// At most `n` characters (inclusive).
pub fn max_length(n: usize, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(MaxLength { n }, next)
}

/// Exactly `n` characters.
pub fn exact_length(n: usize, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(ExactLength { n }, next)
}

/// Between `min` and `max` characters, both inclusive.
///
/// With `min > max` no value can pass; the rule is still built and logged.
pub fn length_range(min: usize, max: usize, next: Verifier<str>) -> Verifier<str> {
    if min > max {
        warn!(rule = "length-range", min, max, "empty length range: every value will be rejected");
    }
    Verifier::rule(LengthRange { min, max }, next)
}

pub fn not_empty(next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(NotEmpty, next)
}

/// Every character of the value must appear in `allowed`.
///
/// The message lists the set in the order given.
pub fn allowed_characters<I>(allowed: I, next: Verifier<str>) -> Verifier<str>
where
    I: IntoIterator<Item = char>,
{
    let allowed = allowed.into_iter().collect();
    Verifier::rule(AllowedCharacters { allowed }, next)
}

/// No character of the value may appear in `forbidden`.
pub fn disallowed_characters<I>(forbidden: I, next: Verifier<str>) -> Verifier<str>
where
    I: IntoIterator<Item = char>,
{
    let forbidden = forbidden.into_iter().collect();
    Verifier::rule(DisallowedCharacters { forbidden }, next)
}

pub fn starts_with(prefix: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(StartsWith { prefix: prefix.into() }, next)
}

pub fn ends_with(suffix: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(EndsWith { suffix: suffix.into() }, next)
}

pub fn contains(needle: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(Contains { needle: needle.into() }, next)
}

pub fn does_not_contain(needle: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(DoesNotContain { needle: needle.into() }, next)
}

pub fn equal_to(expected: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(EqualTo { expected: expected.into() }, next)
}

pub fn not_equal_to(rejected: impl Into<String>, next: Verifier<str>) -> Verifier<str> {
    Verifier::rule(NotEqualTo { rejected: rejected.into() }, next)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vouch_core::{finalize, run};

    use super::*;

    fn errors(v: &Verifier<str>, value: &str) -> Vec<String> {
        v.evaluate(value)
    }

    // ── Length ────────────────────────────────────────────────────────────────

    /// The upper bound is inclusive even though the message says "less than".
    #[test]
    fn test_max_length_is_inclusive() {
        let v = max_length(5, finalize());
        assert!(run("hello", &v).is_ok());
        assert_eq!(errors(&v, "hello!"), vec!["must be less than 5 characters long"]);
    }

    #[test]
    fn test_exact_length() {
        let v = exact_length(3, finalize());
        assert!(run("abc", &v).is_ok());
        assert_eq!(errors(&v, "ab"), vec!["must be exactly 3 characters long"]);
        assert_eq!(errors(&v, "abcd"), vec!["must be exactly 3 characters long"]);
    }

    #[test]
    fn test_length_range_bounds_are_inclusive() {
        let v = length_range(2, 4, finalize());
        assert!(run("ab", &v).is_ok());
        assert!(run("abcd", &v).is_ok());
        assert_eq!(
            errors(&v, "a"),
            vec!["must be at least 2 characters long and at most 4 characters long"]
        );
        assert_eq!(errors(&v, "abcde").len(), 1);
    }

    #[test]
    fn test_inverted_length_range_rejects_everything() {
        let v = length_range(5, 1, finalize());
        assert!(run("", &v).is_err());
        assert!(run("abc", &v).is_err());
        assert!(run("abcdef", &v).is_err());
    }

    /// Lengths are counted in characters, not UTF-8 bytes.
    #[test]
    fn test_length_counts_characters() {
        let word = "héllo wörld";
        assert_eq!(word.len(), 13);

        assert!(run(word, &exact_length(11, finalize())).is_ok());
        assert!(run(word, &max_length(11, finalize())).is_ok());
        assert!(run("日本語", &length_range(3, 3, finalize())).is_ok());
    }

    #[test]
    fn test_not_empty() {
        let v = not_empty(finalize());
        assert!(run(" ", &v).is_ok());
        assert_eq!(errors(&v, ""), vec!["must not be empty"]);
    }

    // ── Character sets ────────────────────────────────────────────────────────

    #[test]
    fn test_allowed_characters() {
        let v = allowed_characters(['h', 'e', 'l', 'o'], finalize());
        assert!(run("hello", &v).is_ok());
        assert!(run("", &v).is_ok());
        assert_eq!(
            errors(&v, "hello, world"),
            vec![r#"must only contain the following characters: "h", "e", "l", "o""#]
        );
    }

    /// The set is listed in the order the caller gave it, duplicates included.
    #[test]
    fn test_allowed_characters_message_keeps_given_order() {
        let v = allowed_characters("zyxz".chars(), finalize());
        assert_eq!(
            errors(&v, "a"),
            vec![r#"must only contain the following characters: "z", "y", "x", "z""#]
        );
    }

    #[test]
    fn test_disallowed_characters() {
        let v = disallowed_characters([',', ' '], finalize());
        assert!(run("hello", &v).is_ok());
        assert_eq!(
            errors(&v, "hello, world"),
            vec![r#"must not contain the following characters: ",", " ""#]
        );
    }

    // ── Content ───────────────────────────────────────────────────────────────

    #[test]
    fn test_starts_with_is_case_sensitive() {
        let v = starts_with("hello", finalize());
        assert!(run("hello, world", &v).is_ok());
        assert_eq!(errors(&v, "Hello, world"), vec![r#"must start with: "hello""#]);
    }

    #[test]
    fn test_ends_with() {
        let v = ends_with("world", finalize());
        assert!(run("hello, world", &v).is_ok());
        assert_eq!(errors(&v, "hello"), vec![r#"must end with: "world""#]);
    }

    #[test]
    fn test_contains_and_does_not_contain() {
        let has = contains(", ", finalize());
        let lacks = does_not_contain(", ", finalize());

        assert!(run("hello, world", &has).is_ok());
        assert_eq!(errors(&has, "hello"), vec![r#"must contain: ", ""#]);

        assert!(run("hello", &lacks).is_ok());
        assert_eq!(errors(&lacks, "hello, world"), vec![r#"must not contain: ", ""#]);
    }

    #[test]
    fn test_equal_and_not_equal() {
        let eq = equal_to("secret", finalize());
        let ne = not_equal_to("secret", finalize());

        assert!(run("secret", &eq).is_ok());
        assert_eq!(errors(&eq, "Secret"), vec![r#"must be equal to: "secret""#]);

        assert!(run("Secret", &ne).is_ok());
        assert_eq!(errors(&ne, "secret"), vec![r#"must not be equal to: "secret""#]);
    }

    // ── Chains ────────────────────────────────────────────────────────────────

    /// Every failing rule reports, in declaration order.
    #[test]
    fn test_chain_reports_all_failures_in_order() {
        let v = min_length(
            20,
            starts_with(
                "Hello",
                allowed_characters('a'..='z', not_equal_to("hello, world", finalize())),
            ),
        );

        let violations = run("hello, world", &v).unwrap_err();
        assert_eq!(violations.len(), 4);
        assert_eq!(violations[0], "must be at least 20 characters long");
        assert_eq!(violations[1], r#"must start with: "Hello""#);
        assert!(violations[2].starts_with("must only contain the following characters: \"a\", \"b\""));
        assert_eq!(violations[3], r#"must not be equal to: "hello, world""#);
    }
}
