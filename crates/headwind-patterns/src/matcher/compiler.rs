//! Regex compilation for chain stages and separators.

use regex::{Regex, RegexBuilder};

use crate::errors::{PatternError, class_pattern_error, separator_error};

/// Compile one chain stage. Stages always match case-insensitively.
pub(super) fn compile_stage(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| class_pattern_error(pattern, err))
}

pub(super) fn compile_chain(stages: &[String]) -> Result<Vec<Regex>, PatternError> {
    stages.iter().map(|stage| compile_stage(stage)).collect()
}

/// Compile a token separator. Separators keep their case sensitivity.
pub(super) fn compile_separator(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|err| separator_error(pattern, err))
}
