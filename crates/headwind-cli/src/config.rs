//! Front-end configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `HEADWIND_`; command line flags take precedence over both.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "HEADWIND_LOG_LEVEL";

/// Environment variable naming the project formatter binary.
pub const FORMATTER_VAR: &str = "HEADWIND_FORMATTER";

/// Formatter run by the `project` command unless configured otherwise.
pub const DEFAULT_FORMATTER: &str = "rustywind";

/// Verbosity of the `headwind` binary's stderr log, set through
/// `--log-level` or `HEADWIND_LOG_LEVEL`. `Info` unless either is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every class string before and after sorting.
    Trace,
    /// Matcher counts per language and change counts per file.
    Debug,
    /// Files sorted and formatter runs.
    #[default]
    Info,
    /// Skipped paths and formatter stderr.
    Warn,
    /// Only failures that end the run.
    Error,
}

impl LogLevel {
    const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// The `EnvFilter` directive selecting this level.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Level names are matched case-insensitively; `warning` is accepted for
/// `warn`.
impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        let name = if name == "warning" { "warn" } else { name.as_str() };
        Self::ALL
            .into_iter()
            .find(|level| level.directive() == name)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "unknown log level '{s}' for {LOG_LEVEL_VAR} or --log-level"
                ))
            })
    }
}

/// Configuration for the command line front end.
///
/// # Environment Variables
///
/// - `HEADWIND_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `HEADWIND_FORMATTER`: program run by the `project` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Whole-project formatter binary.
    pub formatter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            formatter: DEFAULT_FORMATTER.to_owned(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from variables resolved by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|val| val.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        let formatter = match lookup(FORMATTER_VAR) {
            Some(val) if val.trim().is_empty() => {
                return Err(CliError::InvalidConfig(format!(
                    "{FORMATTER_VAR} is set but empty"
                )));
            }
            Some(val) => val,
            None => DEFAULT_FORMATTER.to_owned(),
        };

        Ok(Self {
            log_level,
            formatter,
        })
    }

    /// Apply command line overrides on top of environment-based values.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, formatter: Option<&str>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(program) = formatter {
            program.clone_into(&mut self.formatter);
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("info", LogLevel::Info)]
    #[case("warn", LogLevel::Warn)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    #[case("TRACE", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn every_directive_parses_back() {
        for level in LogLevel::ALL {
            assert_eq!(level.directive().parse::<LogLevel>().ok(), Some(level));
        }
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let err = "invalid"
            .parse::<LogLevel>()
            .expect_err("unknown level must fail");
        assert!(err.to_string().contains("unknown log level 'invalid'"));
        assert!(err.to_string().contains(LOG_LEVEL_VAR));
    }

    #[test]
    fn config_default_values() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.formatter, "rustywind");
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Error), Some("prettier"));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.formatter, "prettier");

        let config = CliConfig::default().apply_overrides(None, None);
        assert_eq!(config, CliConfig::default());
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        move |name: &str| {
            vars.iter()
                .find(|(candidate, _)| candidate == name)
                .map(|(_, value)| value.clone())
        }
    }

    #[test]
    fn from_lookup_reads_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "debug"),
            (FORMATTER_VAR, "/opt/bin/rustywind"),
        ]))
        .expect("valid environment");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.formatter, "/opt/bin/rustywind");
    }

    #[test]
    fn from_lookup_defaults_missing_variables() {
        let config = CliConfig::from_lookup(lookup(&[])).expect("empty environment");
        assert_eq!(config, CliConfig::default());
    }

    #[rstest]
    #[case(LOG_LEVEL_VAR, "loud")]
    #[case(FORMATTER_VAR, "  ")]
    fn from_lookup_rejects_invalid_values(#[case] name: &str, #[case] value: &str) {
        let result = CliConfig::from_lookup(lookup(&[(name, value)]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
