//! Capture-group selection shared by every extraction stage.

use regex::{Captures, Match};

/// Return the first capture group after group 0 that participated in the
/// match and captured a non-empty string.
///
/// Patterns may offer several alternatives, each with its own group (a
/// quoted attribute versus a template tag, say); whichever alternative
/// actually matched supplies the value. `None` means the match carried no
/// usable value and should be skipped.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use headwind_patterns::first_capture;
/// let regex = Regex::new(r#"class="([^"]*)"|tw`([^`]*)`"#).unwrap();
/// let caps = regex.captures("tw`flex`").unwrap();
/// assert_eq!(first_capture(&caps).map(|m| m.as_str()), Some("flex"));
/// ```
#[must_use]
pub fn first_capture<'h>(caps: &Captures<'h>) -> Option<Match<'h>> {
    caps.iter().skip(1).flatten().find(|m| !m.is_empty())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use regex::Regex;

    fn captures<'h>(regex: &Regex, text: &'h str) -> Captures<'h> {
        regex.captures(text).expect("pattern should match")
    }

    #[test]
    fn skips_groups_that_did_not_participate() {
        let regex = Regex::new(r"(a)|(b)").expect("test regex must compile");
        let caps = captures(&regex, "b");
        assert_eq!(first_capture(&caps).map(|m| m.as_str()), Some("b"));
    }

    #[test]
    fn skips_empty_groups() {
        let regex = Regex::new(r"x(a*)(b+)").expect("test regex must compile");
        let caps = captures(&regex, "xbb");
        let found = first_capture(&caps).expect("second group should be used");
        assert_eq!((found.as_str(), found.start()), ("bb", 1));
    }

    #[test]
    fn ignores_whole_match_when_pattern_has_no_groups() {
        let regex = Regex::new(r"class").expect("test regex must compile");
        let caps = captures(&regex, "class");
        assert!(first_capture(&caps).is_none());
    }
}
