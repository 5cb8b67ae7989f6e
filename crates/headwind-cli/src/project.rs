//! Running an external formatter over a whole project tree.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::CliError;

/// Flag asking the formatter to rewrite files in place.
pub const WRITE_FLAG: &str = "--write";

/// Run `program PATH --write`, forwarding its output to the log.
///
/// # Errors
///
/// Returns [`CliError::FormatterSpawn`] when the program cannot be started
/// and [`CliError::FormatterExit`] when it exits unsuccessfully.
pub fn run_project_formatter(program: &str, path: &Path) -> Result<(), CliError> {
    tracing::info!(program, path = %path.display(), "running project formatter");
    let output = Command::new(program)
        .arg(path)
        .arg(WRITE_FLAG)
        .output()
        .map_err(|source| CliError::FormatterSpawn {
            program: program.to_owned(),
            source,
        })?;
    forward_output(program, &output);

    if output.status.success() {
        Ok(())
    } else {
        Err(CliError::FormatterExit {
            program: program.to_owned(),
            code: output.status.code(),
        })
    }
}

fn forward_output(program: &str, output: &Output) {
    for line in String::from_utf8_lossy(&output.stdout).lines() {
        tracing::info!(program, "{line}");
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        tracing::warn!(program, "{line}");
    }
}
