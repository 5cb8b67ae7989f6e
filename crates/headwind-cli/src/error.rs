//! Error types for the command line front end.

use std::path::PathBuf;

use headwind::{PatternError, SettingsError};
use thiserror::Error;

/// Errors raised while sorting files or running the project formatter.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file or directory could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A configured class pattern does not compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The project formatter could not be started.
    #[error("failed to run `{program}`: {source}")]
    FormatterSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The project formatter exited unsuccessfully.
    #[error("`{program}` exited with {}", exit_description(*code))]
    FormatterExit {
        /// Program that was invoked.
        program: String,
        /// Exit code, absent when the process was killed by a signal.
        code: Option<i32>,
    },
}

fn exit_description(code: Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_owned(), |code| format!("status {code}"))
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
