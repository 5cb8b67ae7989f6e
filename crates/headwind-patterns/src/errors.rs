//! Error types raised while compiling class-extraction patterns.

use thiserror::Error;

/// Errors surfaced while turning a language configuration into matchers.
///
/// A broken pattern is never skipped; the whole build fails.
///
/// # Examples
/// ```
/// use headwind_patterns::{LangConfig, PatternError, build_matchers};
/// let err = build_matchers(&LangConfig::Pattern("class=(".into())).unwrap_err();
/// assert!(matches!(err, PatternError::ClassPattern { .. }));
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// A chain stage failed to compile.
    #[error("invalid class pattern `{pattern}`: {source}")]
    ClassPattern {
        /// Source text of the offending pattern.
        pattern: String,
        /// Underlying regex compilation failure.
        #[source]
        source: regex::Error,
    },
    /// The token separator failed to compile.
    #[error("invalid class separator `{pattern}`: {source}")]
    Separator {
        /// Source text of the offending separator.
        pattern: String,
        /// Underlying regex compilation failure.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Source text of the pattern that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::ClassPattern { pattern, .. } | Self::Separator { pattern, .. } => pattern,
        }
    }
}

pub(crate) fn class_pattern_error(pattern: &str, source: regex::Error) -> PatternError {
    PatternError::ClassPattern {
        pattern: pattern.to_owned(),
        source,
    }
}

pub(crate) fn separator_error(pattern: &str, source: regex::Error) -> PatternError {
    PatternError::Separator {
        pattern: pattern.to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_class_pattern_errors_with_source() {
        let err = class_pattern_error("(", regex::Error::Syntax("bad".into()));
        assert_eq!(err.to_string(), "invalid class pattern `(`: bad");
        assert_eq!(err.pattern(), "(");
    }

    #[test]
    fn formats_separator_errors_with_source() {
        let err = separator_error("[", regex::Error::Syntax("oops".into()));
        assert_eq!(err.to_string(), "invalid class separator `[`: oops");
        assert_eq!(err.pattern(), "[");
    }

    #[test]
    fn exposes_regex_error_as_source() {
        use std::error::Error as _;
        let err = class_pattern_error("(", regex::Error::Syntax("bad".into()));
        assert!(err.source().is_some());
    }
}
