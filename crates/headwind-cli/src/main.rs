//! The `headwind` binary.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use tracing::info;

use headwind_cli::config::{CliConfig, LogLevel};
use headwind_cli::error::CliError;
use headwind_cli::files::collect_files;
use headwind_cli::logging::init_logging;
use headwind_cli::project::run_project_formatter;
use headwind_cli::session::{Mode, Session};

/// Sort utility classes in HTML, CSS and JSX sources.
#[derive(Parser, Debug)]
#[command(name = "headwind", version, about)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort class strings in files, walking directories.
    Sort {
        /// Report unsorted class strings instead of rewriting files.
        #[arg(long)]
        check: bool,
        /// Language identifier used for every file.
        #[arg(long)]
        language: Option<String>,
        /// JSON settings file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Files or directories to process.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Sort a document read from stdin and print it to stdout.
    Stdin {
        /// Language identifier of the document.
        #[arg(long)]
        language: String,
        /// JSON settings file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the whole-project formatter on a directory.
    Project {
        /// Formatter binary; overrides `HEADWIND_FORMATTER`.
        #[arg(long)]
        formatter: Option<String>,
        /// Project root.
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let formatter = match &cli.command {
        Commands::Project { formatter, .. } => formatter.as_deref(),
        _ => None,
    };
    Ok(CliConfig::from_env()?.apply_overrides(cli.log_level, formatter))
}

fn run(command: Commands, config: &CliConfig) -> Result<ExitCode> {
    match command {
        Commands::Sort {
            check,
            language,
            config: settings,
            paths,
        } => handle_sort(check, language.as_deref(), settings.as_deref(), &paths),
        Commands::Stdin {
            language,
            config: settings,
        } => handle_stdin(&language, settings.as_deref()).map(|()| ExitCode::SUCCESS),
        Commands::Project { path, .. } => {
            run_project_formatter(&config.formatter, &path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Handle the `sort` subcommand.
///
/// In check mode every unsorted class string is printed as
/// `path:line:column` and the exit code is 1.
fn handle_sort(
    check: bool,
    language: Option<&str>,
    settings: Option<&Path>,
    paths: &[PathBuf],
) -> Result<ExitCode> {
    let mut session = Session::load(settings)?;
    let mode = if check { Mode::Check } else { Mode::Write };
    let files = collect_files(paths)?;
    info!(files = files.len(), ?mode, "sorting");

    let mut stdout = io::stdout().lock();
    let mut unsorted = 0_usize;
    for path in &files {
        let outcome = session.process_file(path, language, mode)?;
        if outcome.is_sorted() {
            continue;
        }
        unsorted += 1;
        if mode == Mode::Check {
            for position in &outcome.unsorted {
                writeln!(
                    stdout,
                    "{}:{}:{}: classes are not sorted",
                    outcome.path.display(),
                    position.line + 1,
                    position.character + 1
                )
                .wrap_err("failed to write report")?;
            }
        }
    }
    info!(unsorted, "done");

    if mode == Mode::Check && unsorted > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Handle the `stdin` subcommand.
fn handle_stdin(language: &str, settings: Option<&Path>) -> Result<()> {
    let mut session = Session::load(settings)?;
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .wrap_err("failed to read stdin")?;
    let sorted = session.sort_text(language, &text)?;
    io::stdout()
        .write_all(sorted.as_bytes())
        .wrap_err("failed to write stdout")
}
