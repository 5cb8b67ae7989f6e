//! Declarative shape of a language's `classRegex` setting.
//!
//! The shape is decided once, when the value is constructed or
//! deserialised, and never re-inspected afterwards. The array rule is the
//! subtle part: an array made only of strings is a single chain of narrowing
//! stages, while an array holding anything else lists independent matchers.

use serde::{Deserialize, Serialize};

/// One language's class-extraction configuration.
///
/// # Examples
/// ```
/// use headwind_patterns::LangConfig;
///
/// let chain: LangConfig = serde_json::from_str(r#"["outer (.*)", "inner (.*)"]"#).unwrap();
/// assert!(matches!(chain, LangConfig::Chain(ref stages) if stages.len() == 2));
///
/// let many: LangConfig = serde_json::from_str(r#"[["outer (.*)"], "other (.*)"]"#).unwrap();
/// assert!(matches!(many, LangConfig::Many(ref items) if items.len() == 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LangConfig {
    /// No configuration (`null`); yields no matchers.
    #[default]
    Empty,
    /// A single pattern, forming a one-stage chain.
    Pattern(String),
    /// Plain strings, each one a stage of a single chain.
    Chain(Vec<String>),
    /// Independent configurations, each producing its own matcher.
    Many(Vec<LangConfig>),
    /// The object form carrying an optional separator and replacement.
    Matcher(MatcherSpec),
}

impl From<&str> for LangConfig {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_owned())
    }
}

impl LangConfig {
    /// Build a chain configuration from the given stages.
    #[must_use]
    pub fn chain<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Chain(stages.into_iter().map(Into::into).collect())
    }
}

/// The `regex` field of the object form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegexSpec {
    /// A single pattern.
    One(String),
    /// A chain of narrowing patterns.
    Chain(Vec<String>),
}

impl RegexSpec {
    /// The chain stages in order.
    #[must_use]
    pub fn stages(&self) -> &[String] {
        match self {
            Self::One(pattern) => std::slice::from_ref(pattern),
            Self::Chain(stages) => stages,
        }
    }
}

/// Object form: `{ "regex": …, "separator": …, "replacement": … }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherSpec {
    /// Chain stages; absent means an empty chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexSpec>,
    /// Pattern splitting the class string into tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Text used to join sorted tokens back together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> LangConfig {
        serde_json::from_str(json).expect("configuration should deserialise")
    }

    #[test]
    fn null_is_empty() {
        assert_eq!(parse("null"), LangConfig::Empty);
    }

    #[test]
    fn string_is_single_pattern() {
        assert_eq!(parse(r#""a(b)""#), LangConfig::Pattern("a(b)".into()));
    }

    #[rstest]
    #[case(r#"["a", "b"]"#, LangConfig::chain(["a", "b"]))]
    #[case("[]", LangConfig::Chain(Vec::new()))]
    fn all_string_arrays_are_chains(#[case] json: &str, #[case] expected: LangConfig) {
        assert_eq!(parse(json), expected);
    }

    #[test]
    fn mixed_arrays_are_independent_matchers() {
        let config = parse(r#"[["a", "b"], "c", {"regex": "d", "separator": ","}]"#);
        assert_eq!(
            config,
            LangConfig::Many(vec![
                LangConfig::chain(["a", "b"]),
                LangConfig::Pattern("c".into()),
                LangConfig::Matcher(MatcherSpec {
                    regex: Some(RegexSpec::One("d".into())),
                    separator: Some(",".into()),
                    replacement: None,
                }),
            ])
        );
    }

    #[test]
    fn empty_object_is_matcher_without_stages() {
        assert_eq!(parse("{}"), LangConfig::Matcher(MatcherSpec::default()));
    }

    #[test]
    fn unknown_object_fields_are_rejected() {
        assert!(serde_json::from_str::<LangConfig>(r#"{"pattern": "a"}"#).is_err());
    }

    #[test]
    fn regex_spec_exposes_stages() {
        assert_eq!(RegexSpec::One("a".into()).stages(), ["a".to_owned()]);
        assert_eq!(
            RegexSpec::Chain(vec!["a".into(), "b".into()]).stages(),
            ["a".to_owned(), "b".to_owned()]
        );
    }
}
