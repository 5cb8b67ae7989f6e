//! Default `classRegex` entries keyed by editor language identifier.

use std::collections::BTreeMap;

use headwind_patterns::LangConfig;

/// Language used when a document's language has no entry of its own.
pub const FALLBACK_LANGUAGE: &str = "html";

const HTML: &str = r#"\bclass\s*=\s*["']([_a-zA-Z0-9\s\-:/.\[\]]+)["']"#;

const CSS: &str = r"\B@apply\s+([_a-zA-Z0-9\s\-:/.]+);";

/// Attribute or `tw` template tag; the brace form may hold several strings.
const JSX_OUTER: &str = r#"(?:\b(?:class(?:Name)?|tw)\s*=\s*(?:\{((?:[^{}]|\$\{[^{}]*\})+)\}|(["'`][\w\d\s_\-:/.]+["'`])))|(?:\btw\s*(`[\w\d\s_\-:/.${}]+`))"#;

/// Each quoted string inside the outer capture.
const JSX_INNER: &str = r#"["'`]([\w\d\s_\-:/.${}()\[\]]+)["'`]"#;

const HTML_LANGUAGES: &[&str] = &[
    "html", "astro", "blade", "django-html", "erb", "handlebars", "php", "svelte", "twig", "vue",
];

const CSS_LANGUAGES: &[&str] = &["css", "less", "postcss", "sass", "scss"];

const JSX_LANGUAGES: &[&str] = &[
    "javascript",
    "javascriptreact",
    "typescript",
    "typescriptreact",
];

/// The built-in `classRegex` map.
///
/// # Examples
/// ```
/// use headwind::defaults::default_class_regex;
/// let map = default_class_regex();
/// assert!(map.contains_key("html"));
/// assert!(map.contains_key("typescriptreact"));
/// ```
#[must_use]
pub fn default_class_regex() -> BTreeMap<String, LangConfig> {
    let mut map = BTreeMap::new();
    for language in HTML_LANGUAGES {
        map.insert((*language).to_owned(), LangConfig::from(HTML));
    }
    for language in CSS_LANGUAGES {
        map.insert((*language).to_owned(), LangConfig::from(CSS));
    }
    for language in JSX_LANGUAGES {
        map.insert(
            (*language).to_owned(),
            LangConfig::chain([JSX_OUTER, JSX_INNER]),
        );
    }
    map
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use headwind_patterns::build_matchers;

    #[test]
    fn every_default_compiles() {
        for (language, config) in default_class_regex() {
            let matchers = build_matchers(&config)
                .unwrap_or_else(|err| panic!("default for {language} should compile: {err}"));
            assert!(!matchers.is_empty(), "{language} has no matcher");
        }
    }

    #[test]
    fn fallback_language_has_an_entry() {
        assert!(default_class_regex().contains_key(FALLBACK_LANGUAGE));
    }

    #[test]
    fn css_default_finds_apply_directives() {
        let matchers = build_matchers(&LangConfig::from(CSS)).expect("css default compiles");
        let text = ".btn { @apply p-4 flex; }";
        let found: Vec<_> = matchers.iter().flat_map(|m| m.find_all(text)).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|m| (m.text, m.start)), Some(("p-4 flex", 14)));
    }
}
