//! Recursive extraction over a chain of narrowing regexes.
//!
//! Each stage runs over the text captured by the previous one, so only the
//! first stage ever sees the whole document. Offsets are composed on the way
//! down: a leaf's reported start is the byte offset of its first character
//! in the original text, however deep the chain.

use std::ops::Range;

use regex::Regex;

use crate::capture::first_capture;

/// A leaf match: the captured class string and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch<'t> {
    /// The captured class string.
    pub text: &'t str,
    /// Byte offset of `text` in the original document.
    pub start: usize,
}

impl TextMatch<'_> {
    /// Byte offset one past the end of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte range of the match in the original document.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Invoke `on_match` for every leaf match of `chain` in `text`.
///
/// Leaves arrive in document order: first-stage matches left to right, and
/// within each one its nested matches left to right. An empty chain matches
/// nothing, and a match with no non-empty capture group is skipped.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use headwind_patterns::for_each_match;
/// let chain = [
///     Regex::new(r"clsx\(([^)]*)\)").unwrap(),
///     Regex::new(r#""([^"]*)""#).unwrap(),
/// ];
/// let mut seen = Vec::new();
/// for_each_match(&chain, r#"x clsx("a b", "c")"#, |text, start| seen.push((text, start)));
/// assert_eq!(seen, [("a b", 8), ("c", 15)]);
/// ```
pub fn for_each_match<'t, F>(chain: &[Regex], text: &'t str, mut on_match: F)
where
    F: FnMut(&'t str, usize),
{
    walk(chain, text, 0, &mut on_match);
}

/// Collect every leaf match of `chain` in `text`.
#[must_use]
pub fn extract<'t>(chain: &[Regex], text: &'t str) -> Vec<TextMatch<'t>> {
    let mut matches = Vec::new();
    for_each_match(chain, text, |text, start| {
        matches.push(TextMatch { text, start });
    });
    matches
}

fn walk<'t, F>(chain: &[Regex], text: &'t str, base: usize, on_match: &mut F)
where
    F: FnMut(&'t str, usize),
{
    let Some((stage, rest)) = chain.split_first() else {
        return;
    };
    for caps in stage.captures_iter(text) {
        let Some(capture) = first_capture(&caps) else {
            continue;
        };
        let start = base + capture.start();
        if rest.is_empty() {
            on_match(capture.as_str(), start);
        } else {
            walk(rest, capture.as_str(), start, on_match);
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;

    fn chain(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(p).expect("test regex must compile"))
            .collect()
    }

    #[test]
    fn empty_chain_matches_nothing() {
        assert!(extract(&[], "class=\"flex\"").is_empty());
    }

    #[test]
    fn single_stage_reports_capture_offset() {
        let found = extract(&chain(&[r#"class="([^"]*)""#]), r#"<a class="w-64 h-full">"#);
        assert_eq!(
            found,
            [TextMatch {
                text: "w-64 h-full",
                start: 10
            }]
        );
        assert_eq!(found.first().map(TextMatch::range), Some(10..21));
    }

    #[test]
    fn nested_offsets_compose() {
        let text = r#"<p class={clsx("a", cond && "b c")}>"#;
        let found = extract(&chain(&[r"class=\{([^}]*)\}", r#""([^"]*)""#]), text);
        let spans: Vec<_> = found.iter().map(|m| (m.text, m.start)).collect();
        assert_eq!(spans, [("a", 16), ("b c", 29)]);
        for m in &found {
            assert_eq!(text.get(m.range()), Some(m.text));
        }
    }

    #[test]
    fn capture_identical_to_prefix_text_reports_true_offset() {
        let text = r#"class="class""#;
        let found = extract(&chain(&[r#"class="([^"]*)""#]), text);
        assert_eq!(found.first().map(|m| m.start), Some(7));
    }

    #[test]
    fn three_stage_chain_narrows_each_capture() {
        let text = "xx [ <a b> <c> ] yy [ <d> ]";
        let found = extract(&chain(&[r"\[([^\]]*)\]", r"<([^>]*)>", r"(\w)"]), text);
        let spans: Vec<_> = found.iter().map(|m| (m.text, m.start)).collect();
        assert_eq!(spans, [("a", 6), ("b", 8), ("c", 12), ("d", 23)]);
    }

    #[test]
    fn matches_without_captures_are_skipped() {
        let found = extract(&chain(&[r"class", r"(s)"]), "class");
        assert!(found.is_empty());
    }

    #[test]
    fn alternatives_use_whichever_group_matched() {
        let text = r#"class="a" tw`b`"#;
        let found = extract(&chain(&[r#"class="([^"]*)"|tw`([^`]*)`"#]), text);
        let spans: Vec<_> = found.iter().map(|m| (m.text, m.start)).collect();
        assert_eq!(spans, [("a", 7), ("b", 13)]);
    }
}
