//! Command line front end for `headwind`.
//!
//! Sorts class strings in files on disk, checks that they are sorted, and
//! runs an external formatter over a whole project.

pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod project;
pub mod session;

pub use config::{CliConfig, LogLevel};
pub use error::CliError;
pub use session::{FileOutcome, Mode, Session};
