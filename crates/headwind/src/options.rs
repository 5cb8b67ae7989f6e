//! Per-invocation formatting options.

use headwind_patterns::{DEFAULT_REPLACEMENT, Matcher};
use regex::Regex;

use crate::settings::Settings;

/// Options controlling how one class string is rewritten.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Keep only the first occurrence of each token.
    pub remove_duplicates: bool,
    /// Place unranked tokens before ranked ones instead of after.
    pub prepend_unknown: bool,
    /// Prefix applied to every class-order entry before matching.
    pub custom_prefix: String,
    /// Token separator; runs of whitespace when `None`.
    pub separator: Option<Regex>,
    /// Text joining the sorted tokens.
    pub replacement: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            prepend_unknown: false,
            custom_prefix: String::new(),
            separator: None,
            replacement: DEFAULT_REPLACEMENT.to_owned(),
        }
    }
}

impl FormatOptions {
    /// Options from the user's settings, with whitespace splitting.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            remove_duplicates: settings.remove_duplicates,
            prepend_unknown: settings.prepend_custom_classes,
            custom_prefix: settings.custom_tailwind_prefix.clone(),
            ..Self::default()
        }
    }

    /// Adopt the separator and replacement of `matcher`.
    #[must_use]
    pub fn for_matcher(mut self, matcher: &Matcher) -> Self {
        self.separator = matcher.separator().cloned();
        matcher.replacement().clone_into(&mut self.replacement);
        self
    }

    /// Split `text` into non-empty tokens.
    #[must_use]
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.separator.as_ref().map_or_else(
            || text.split_whitespace().collect(),
            |separator| separator.split(text).filter(|t| !t.is_empty()).collect(),
        )
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use headwind_patterns::{LangConfig, MatcherSpec, RegexSpec, build_matchers};
    use rstest::rstest;

    #[test]
    fn defaults_remove_duplicates_and_append_unknown() {
        let options = FormatOptions::default();
        assert!(options.remove_duplicates);
        assert!(!options.prepend_unknown);
        assert_eq!(options.replacement, " ");
        assert_eq!(options.split(" a \n b "), ["a", "b"]);
    }

    #[test]
    fn reads_flags_from_settings() {
        let settings = Settings {
            remove_duplicates: false,
            prepend_custom_classes: true,
            custom_tailwind_prefix: "tw-".into(),
            ..Settings::default()
        };
        let options = FormatOptions::from_settings(&settings);
        assert!(!options.remove_duplicates);
        assert!(options.prepend_unknown);
        assert_eq!(options.custom_prefix, "tw-");
    }

    #[test]
    fn adopts_matcher_separator() {
        let spec = MatcherSpec {
            regex: Some(RegexSpec::One("(x)".into())),
            separator: Some(r"\.".into()),
            replacement: Some(".".into()),
        };
        let matchers = build_matchers(&LangConfig::Matcher(spec)).expect("spec should compile");
        let options = FormatOptions::default().for_matcher(&matchers[0]);
        assert_eq!(options.replacement, ".");
        assert_eq!(options.split("a.b..c"), ["a", "b", "c"]);
    }

    #[rstest]
    #[case(None, "  flex\n\tp-4  ", &["flex", "p-4"])]
    #[case(Some(r"\+\+"), "flex++p-4++", &["flex", "p-4"])]
    #[case(Some(","), "flex,,p-4", &["flex", "p-4"])]
    fn split_drops_empty_tokens(
        #[case] separator: Option<&str>,
        #[case] text: &str,
        #[case] expected: &[&str],
    ) {
        let options = FormatOptions {
            separator: separator.map(|pattern| Regex::new(pattern).expect("separator compiles")),
            ..FormatOptions::default()
        };
        assert_eq!(options.split(text), expected);
    }
}
