//! Compile [`LangConfig`] values into ready-to-run [`Matcher`]s.

mod compiler;

use regex::Regex;

use crate::config::{LangConfig, MatcherSpec};
use crate::errors::PatternError;
use crate::extract::{TextMatch, extract};

use compiler::{compile_chain, compile_separator};

/// Text used to join tokens when a matcher names no replacement.
pub const DEFAULT_REPLACEMENT: &str = " ";

/// One independent extraction strategy.
///
/// Stage `i + 1` of the chain only ever sees the text captured by stage
/// `i`. A matcher with an empty chain matches nothing. Compiled regexes hold
/// no iteration state, so a matcher may be reused across documents and
/// threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    chain: Vec<Regex>,
    separator: Option<Regex>,
    replacement: String,
}

impl Matcher {
    /// The compiled chain stages in order.
    #[must_use]
    pub fn chain(&self) -> &[Regex] {
        &self.chain
    }

    /// The token separator, when one was configured.
    #[must_use]
    pub fn separator(&self) -> Option<&Regex> {
        self.separator.as_ref()
    }

    /// The text used to join sorted tokens.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Find every leaf match of this matcher in `text`.
    #[must_use]
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<TextMatch<'t>> {
        extract(&self.chain, text)
    }

    fn from_spec(spec: &MatcherSpec) -> Result<Self, PatternError> {
        let stages = spec.regex.as_ref().map_or(&[][..], |regex| regex.stages());
        let separator = spec
            .separator
            .as_deref()
            .map(compile_separator)
            .transpose()?;
        let replacement = spec
            .replacement
            .as_deref()
            .or(spec.separator.as_deref())
            .unwrap_or(DEFAULT_REPLACEMENT)
            .to_owned();
        Ok(Self {
            chain: compile_chain(stages)?,
            separator,
            replacement,
        })
    }

    fn from_stages(stages: &[String]) -> Result<Self, PatternError> {
        Ok(Self {
            chain: compile_chain(stages)?,
            separator: None,
            replacement: DEFAULT_REPLACEMENT.to_owned(),
        })
    }
}

/// Build the matchers described by a language configuration.
///
/// A string or an all-string array forms one matcher; an array holding any
/// other element yields one matcher per element; an absent value or an
/// empty array yields none.
///
/// # Errors
/// Returns [`PatternError`] as soon as any stage or separator fails to
/// compile.
///
/// # Examples
/// ```
/// use headwind_patterns::{LangConfig, build_matchers};
/// let chain = LangConfig::chain([r"class=(\S+)", r#""([^"]+)""#]);
/// let matchers = build_matchers(&chain).unwrap();
/// assert_eq!(matchers.len(), 1);
/// assert_eq!(matchers[0].chain().len(), 2);
/// assert!(build_matchers(&LangConfig::Empty).unwrap().is_empty());
/// ```
pub fn build_matchers(config: &LangConfig) -> Result<Vec<Matcher>, PatternError> {
    match config {
        LangConfig::Empty => Ok(Vec::new()),
        LangConfig::Chain(stages) if stages.is_empty() => Ok(Vec::new()),
        LangConfig::Many(items) => {
            let mut matchers = Vec::with_capacity(items.len());
            for item in items {
                build_item(item, &mut matchers)?;
            }
            Ok(matchers)
        }
        LangConfig::Pattern(_) | LangConfig::Chain(_) | LangConfig::Matcher(_) => {
            let mut matchers = Vec::with_capacity(1);
            build_item(config, &mut matchers)?;
            Ok(matchers)
        }
    }
}

/// Build a single element of a matcher list. Every element produces
/// exactly one matcher, except nested lists, which are flattened.
fn build_item(item: &LangConfig, out: &mut Vec<Matcher>) -> Result<(), PatternError> {
    match item {
        LangConfig::Empty => out.push(Matcher::from_stages(&[])?),
        LangConfig::Pattern(pattern) => {
            out.push(Matcher::from_stages(std::slice::from_ref(pattern))?);
        }
        LangConfig::Chain(stages) => out.push(Matcher::from_stages(stages)?),
        LangConfig::Matcher(spec) => out.push(Matcher::from_spec(spec)?),
        LangConfig::Many(items) => {
            for nested in items {
                build_item(nested, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use crate::config::RegexSpec;
    use rstest::rstest;

    const OUTER: &str = r#"\bclass(?:Name)?\s*=\s*(["'][^"']*["'])"#;
    const INNER: &str = r#"["']([^"']*)["']"#;

    fn build(config: &LangConfig) -> Vec<Matcher> {
        build_matchers(config).expect("configuration should compile")
    }

    fn sources(matcher: &Matcher) -> Vec<&str> {
        matcher.chain().iter().map(Regex::as_str).collect()
    }

    #[rstest]
    #[case::absent(LangConfig::Empty)]
    #[case::empty_array(LangConfig::Chain(Vec::new()))]
    #[case::empty_list(LangConfig::Many(Vec::new()))]
    fn empty_configs_build_nothing(#[case] config: LangConfig) {
        assert!(build(&config).is_empty());
    }

    #[test]
    fn single_pattern_builds_one_stage() {
        let matchers = build(&LangConfig::from(OUTER));
        assert_eq!(matchers.len(), 1);
        assert_eq!(sources(&matchers[0]), [OUTER]);
        assert!(matchers[0].separator().is_none());
        assert_eq!(matchers[0].replacement(), " ");
    }

    #[test]
    fn string_array_builds_one_layered_matcher() {
        let matchers = build(&LangConfig::chain([OUTER, INNER]));
        assert_eq!(matchers.len(), 1);
        assert_eq!(sources(&matchers[0]), [OUTER, INNER]);
    }

    #[test]
    fn list_of_chains_builds_independent_matchers() {
        let chain = LangConfig::chain([OUTER, INNER]);
        let matchers = build(&LangConfig::Many(vec![chain.clone(), chain]));
        assert_eq!(matchers.len(), 2);
        assert!(matchers.iter().all(|m| sources(m) == [OUTER, INNER]));
    }

    #[test]
    fn object_form_carries_separator_and_replacement() {
        let spec = MatcherSpec {
            regex: Some(RegexSpec::Chain(vec![OUTER.into(), INNER.into()])),
            separator: Some(r"\+\+".into()),
            replacement: Some("++".into()),
        };
        let matchers = build(&LangConfig::Matcher(spec));
        assert_eq!(sources(&matchers[0]), [OUTER, INNER]);
        assert_eq!(matchers[0].separator().map(Regex::as_str), Some(r"\+\+"));
        assert_eq!(matchers[0].replacement(), "++");
    }

    #[test]
    fn replacement_falls_back_to_separator_source() {
        let spec = MatcherSpec {
            regex: Some(RegexSpec::One(INNER.into())),
            separator: Some(",".into()),
            replacement: None,
        };
        let matchers = build(&LangConfig::Matcher(spec));
        assert_eq!(matchers[0].replacement(), ",");
    }

    #[test]
    fn empty_object_builds_matcher_without_stages() {
        let matchers = build(&LangConfig::Matcher(MatcherSpec::default()));
        assert_eq!(matchers.len(), 1);
        assert!(matchers[0].chain().is_empty());
        assert!(matchers[0].find_all("class=\"flex\"").is_empty());
    }

    #[test]
    fn mixed_list_builds_one_matcher_per_element() {
        let config = LangConfig::Many(vec![
            LangConfig::chain([OUTER]),
            LangConfig::from(INNER),
            LangConfig::Matcher(MatcherSpec {
                regex: Some(RegexSpec::Chain(vec![OUTER.into(), INNER.into()])),
                separator: None,
                replacement: Some(" ".into()),
            }),
            LangConfig::Matcher(MatcherSpec {
                regex: Some(RegexSpec::One(INNER.into())),
                separator: Some(r"\.".into()),
                replacement: Some(".".into()),
            }),
        ]);
        let matchers = build(&config);
        assert_eq!(matchers.len(), 4);
        assert_eq!(sources(&matchers[0]), [OUTER]);
        assert_eq!(sources(&matchers[1]), [INNER]);
        assert_eq!(sources(&matchers[2]), [OUTER, INNER]);
        assert_eq!(matchers[3].separator().map(Regex::as_str), Some(r"\."));
        assert_eq!(matchers[3].replacement(), ".");
    }

    #[test]
    fn stages_are_case_insensitive() {
        let matchers = build(&LangConfig::from(r#"class="([^"]+)""#));
        let found = matchers[0].find_all(r#"CLASS="flex""#);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn broken_stage_fails_the_whole_build() {
        let config = LangConfig::Many(vec![LangConfig::from(INNER), LangConfig::from("(")]);
        let err = build_matchers(&config).expect_err("unbalanced group must fail");
        assert!(matches!(err, PatternError::ClassPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn broken_separator_fails_the_build() {
        let spec = MatcherSpec {
            regex: Some(RegexSpec::One(INNER.into())),
            separator: Some("[".into()),
            replacement: None,
        };
        let err = build_matchers(&LangConfig::Matcher(spec)).expect_err("separator must fail");
        assert!(matches!(err, PatternError::Separator { .. }));
    }
}
