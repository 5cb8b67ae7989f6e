//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so that `headwind stdin` output on stdout
//! stays clean. Library crates log through the `log` facade, which the
//! subscriber picks up.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.directive())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level` (parsed into `config.log_level`)
/// 2. `HEADWIND_LOG_LEVEL` (parsed into `config.log_level`)
/// 3. Default configuration value
///
/// If a global subscriber is already set, the error is ignored.
/// Records emitted through the `log` facade are forwarded to the subscriber.
pub fn init_logging(config: &CliConfig) {
    let filter = filter_from_config(config);

    // `try_init` also bridges `log` records into tracing. The first
    // subscriber wins; later calls are ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use serial_test::serial;

    #[test]
    #[serial]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig::default().with_log_level(LogLevel::Debug);
        let filter = filter_from_config(&config);
        assert_eq!(filter.to_string(), "debug");
    }
}
