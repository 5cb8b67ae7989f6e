//! Document-level orchestration: find class strings, sort them, emit edits.

use std::ops::Range;

use headwind_patterns::{Matcher, PatternError, build_matchers};

use crate::options::FormatOptions;
use crate::settings::Settings;
use crate::sort::Sorter;

/// A replacement of the byte range `start..end` of a document.
///
/// Offsets count UTF-8 bytes. Hosts that address text by character or by
/// UTF-16 code unit must convert them first, for instance through
/// [`LineIndex`](crate::LineIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset of the first replaced byte.
    pub start: usize,
    /// Byte offset one past the last replaced byte.
    pub end: usize,
    /// Text replacing the range.
    pub replacement: String,
}

impl Edit {
    /// The replaced byte range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether applying this edit to `document` would leave it unchanged.
    #[must_use]
    pub fn is_noop(&self, document: &str) -> bool {
        document.get(self.range()) == Some(self.replacement.as_str())
    }
}

/// Compiled matchers and order lists for one language, reusable across
/// documents.
#[derive(Debug, Clone)]
pub struct Transformer {
    matchers: Vec<(Matcher, FormatOptions)>,
    sorter: Sorter,
}

impl Transformer {
    /// Prepare a transformer for documents of `language_id`.
    ///
    /// Languages without a `classRegex` entry use the `html` entry.
    ///
    /// # Errors
    /// Returns [`PatternError`] when a configured pattern does not compile.
    pub fn new(settings: &Settings, language_id: &str) -> Result<Self, PatternError> {
        let matchers = settings
            .lang_config(language_id)
            .map(build_matchers)
            .transpose()?
            .unwrap_or_default();
        log::debug!("{} matcher(s) for `{language_id}`", matchers.len());
        let options = FormatOptions::from_settings(settings);
        let sorter = Sorter::new(&settings.default_sort_order, &settings.variant_order, &options);
        let matchers = matchers
            .into_iter()
            .map(|matcher| {
                let options = options.clone().for_matcher(&matcher);
                (matcher, options)
            })
            .collect();
        Ok(Self { matchers, sorter })
    }

    /// Whether no matcher is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// One edit per extracted class string, in matcher then document order.
    ///
    /// Edits whose replacement equals the original text are included.
    #[must_use]
    pub fn edits(&self, document: &str) -> Vec<Edit> {
        let mut edits = Vec::new();
        for (matcher, options) in &self.matchers {
            for found in matcher.find_all(document) {
                let replacement = self.sorter.sort_class_string(found.text, options);
                log::trace!("{:?}: `{}` -> `{replacement}`", found.range(), found.text);
                edits.push(Edit {
                    start: found.start,
                    end: found.end(),
                    replacement,
                });
            }
        }
        edits
    }
}

/// Compute the edits sorting every class string of `document`.
///
/// # Errors
/// Returns [`PatternError`] when the language's configured patterns do not
/// compile.
pub fn transform(
    document: &str,
    language_id: &str,
    settings: &Settings,
) -> Result<Vec<Edit>, PatternError> {
    Ok(Transformer::new(settings, language_id)?.edits(document))
}

/// Apply `edits` to `document`.
///
/// Edits are applied in ascending start order. An edit overlapping an
/// earlier one, or whose range does not fall on character boundaries of
/// `document`, is skipped.
#[must_use]
pub fn apply_edits(document: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.start, edit.end));

    let mut output = String::with_capacity(document.len());
    let mut cursor = 0;
    for edit in ordered {
        if edit.start < cursor {
            log::warn!("skipping edit {:?}: overlaps a previous edit", edit.range());
            continue;
        }
        let (Some(before), Some(_)) = (document.get(cursor..edit.start), document.get(edit.range()))
        else {
            log::warn!("skipping edit {:?}: not a valid range of the document", edit.range());
            continue;
        };
        output.push_str(before);
        output.push_str(&edit.replacement);
        cursor = edit.end;
    }
    output.push_str(document.get(cursor..).unwrap_or_default());
    output
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use crate::position::{LineIndex, Position};
    use headwind_patterns::LangConfig;
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> Settings {
        Settings {
            default_sort_order: vec!["container".into(), "flex".into(), "p-4".into()],
            ..Settings::default()
        }
    }

    #[rstest]
    fn html_attribute_is_rewritten(settings: Settings) {
        let document = r#"<div class="p-4 flex"></div>"#;
        let edits = transform(document, "html", &settings).expect("defaults compile");
        assert_eq!(
            edits,
            [Edit {
                start: 12,
                end: 20,
                replacement: "flex p-4".into()
            }]
        );
        assert_eq!(apply_edits(document, &edits), r#"<div class="flex p-4"></div>"#);
    }

    #[rstest]
    fn offsets_after_multibyte_text_are_bytes(settings: Settings) {
        let document = r#"<p title="日本"><b class="p-4 flex">"#;
        let edits = transform(document, "html", &settings).expect("defaults compile");
        assert_eq!(edits.len(), 1);
        let edit = &edits[0];
        assert_eq!(edit.range(), 28..36);
        assert_eq!(document.get(edit.range()), Some("p-4 flex"));
        assert_eq!(
            LineIndex::new(document).position_at(edit.start),
            Position {
                line: 0,
                character: 24
            }
        );
        assert_eq!(
            apply_edits(document, &edits),
            r#"<p title="日本"><b class="flex p-4">"#
        );
    }

    #[rstest]
    fn unknown_language_falls_back_to_html(settings: Settings) {
        let edits = transform(r#"<p class="p-4 container">"#, "no-such-language", &settings)
            .expect("defaults compile");
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].replacement, "container p-4");
    }

    #[rstest]
    fn no_match_is_an_empty_edit_list(settings: Settings) {
        let edits = transform("nothing to see", "html", &settings).expect("defaults compile");
        assert!(edits.is_empty());
    }

    #[rstest]
    fn sorted_strings_still_produce_noop_edits(settings: Settings) {
        let document = r#"<div class="flex p-4">"#;
        let edits = transform(document, "html", &settings).expect("defaults compile");
        assert_eq!(edits.len(), 1);
        assert!(edits[0].is_noop(document));
    }

    #[rstest]
    fn invalid_user_pattern_fails_fast(mut settings: Settings) {
        settings
            .class_regex
            .insert("html".into(), LangConfig::from("class=\"(unclosed"));
        let err = transform("", "html", &settings).expect_err("pattern must not compile");
        assert_eq!(err.pattern(), "class=\"(unclosed");
    }

    #[rstest]
    fn null_config_disables_sorting(mut settings: Settings) {
        settings.class_regex.insert("html".into(), LangConfig::Empty);
        let transformer = Transformer::new(&settings, "html").expect("empty config builds");
        assert!(transformer.is_empty());
        assert!(transformer.edits(r#"<div class="p-4 flex">"#).is_empty());
    }

    #[rstest]
    fn custom_separator_and_replacement(mut settings: Settings) {
        let json = r#"{
            "regex": "classes\\(([^)]*)\\)",
            "separator": ",\\s*",
            "replacement": ", "
        }"#;
        let config: LangConfig = serde_json::from_str(json).expect("config parses");
        settings.class_regex.insert("custom".into(), config);
        let document = "classes(p-4, flex,container)";
        let edits = transform(document, "custom", &settings).expect("config compiles");
        assert_eq!(apply_edits(document, &edits), "classes(container, flex, p-4)");
    }

    #[test]
    fn apply_edits_orders_and_skips_overlaps() {
        let edits = [
            Edit {
                start: 4,
                end: 5,
                replacement: "E".into(),
            },
            Edit {
                start: 0,
                end: 2,
                replacement: "AB".into(),
            },
            Edit {
                start: 1,
                end: 3,
                replacement: "zz".into(),
            },
        ];
        assert_eq!(apply_edits("abcde", &edits), "ABcdE");
    }

    #[test]
    fn apply_edits_skips_ranges_outside_the_document() {
        let edits = [Edit {
            start: 3,
            end: 10,
            replacement: "x".into(),
        }];
        assert_eq!(apply_edits("abc", &edits), "abc");
    }
}
