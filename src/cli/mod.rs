//! CLI module for the ParaCL end-to-end harness
//!
//! ## Usage
//!
//! ```text
//! paracl-ete [-v] [--exe PATH]... [--tests-dir DIR] [--answers-dir DIR] [--color WHEN]
//! ```
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute` returns `CliResult<ExitCode>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::harness::config::EXE_ENV_VAR;
use crate::harness::{self, ColorChoice, ConsoleReporter, HarnessConfig, ProcessExecutor, SetupError, Summary};
use crate::version::HARNESS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SetupError> for CliError {
    fn from(err: SetupError) -> Self {
        // Debug on a miette report renders the diagnostic with its help text
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Runs end-to-end tests for ParaCL.
#[derive(Parser, Debug)]
#[command(name = "paracl-ete")]
#[command(version = HARNESS_VERSION)]
#[command(about = "Runs end-to-end tests for ParaCL", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Target executable to try (repeatable, tried in order; replaces the built-in build paths)
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: Vec<PathBuf>,

    /// Directory with one input file per test
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Directory with the `<input>.out` reference files
    #[arg(long, value_name = "DIR")]
    pub answers_dir: Option<PathBuf>,

    /// When to color the report
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

impl Cli {
    /// Build the harness configuration from the flags and the process environment.
    pub fn to_config(&self) -> HarnessConfig {
        self.to_config_with_env(env::var_os(EXE_ENV_VAR))
    }

    /// Build the harness configuration: defaults, then `--exe`, then the `PARACL_EXE` value.
    pub fn to_config_with_env(&self, exe_override: Option<OsString>) -> HarnessConfig {
        let mut config = HarnessConfig::new();
        if !self.exe.is_empty() {
            config = config.with_candidates(self.exe.iter().cloned());
        }
        config = config
            .with_exe_override(exe_override)
            .with_verbose(self.verbose)
            .with_color(self.color);
        if let Some(dir) = &self.tests_dir {
            config = config.with_tests_dir(dir);
        }
        if let Some(dir) = &self.answers_dir {
            config = config.with_answers_dir(dir);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    match parse_args(env::args_os()).and_then(execute) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            // --help and --version arrive here with a success code
            if e.exit_code == ExitCode::SUCCESS {
                println!("{}", e.message);
            } else if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Parse command-line arguments.
///
/// Usage errors exit with `1` like every other failure; help and version output exit with `0`.
pub fn parse_args<I, T>(args: I) -> CliResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let exit_code = if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        CliError::new(e.render().to_string().trim_end(), exit_code)
    })
}

/// Map the final tallies to the process exit code.
pub fn summary_exit_code(summary: &Summary) -> ExitCode {
    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Execute the harness and return the aggregate exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.to_config();
    tracing::debug!(?config, "starting harness");

    let mut reporter = ConsoleReporter::stdout(config.verbose, config.color.enabled());
    let summary = harness::run_suite(&config, &ProcessExecutor, &mut reporter)?;
    Ok(summary_exit_code(&summary))
}

// ============================================================================
// Tests
// ============================================================================
