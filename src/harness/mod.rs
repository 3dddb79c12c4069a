//! End-to-end harness
//!
//! Runs the ParaCL interpreter against every file in the tests directory and
//! judges its stdout against the golden references.
//!
//! ## Run phases
//!
//! `locate -> enumerate -> run each case -> summarize`
//!
//! Locating and enumerating are the only fatal phases; they return a
//! [`SetupError`] before any case runs. Each case produces exactly one
//! [`Outcome`], and no outcome stops the run.
//!
//! ## I/O Boundaries
//!
//! Process spawning goes through [`TestExecutor`] and console output through
//! [`TestReporter`], so the orchestration in [`run_suite`] can be driven by
//! fakes in tests.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod comparator;
pub mod config;
pub mod diff;
pub mod enumerator;
pub mod errors;
pub mod executor;
pub mod locator;
pub mod reporter;

use std::path::Path;

pub use comparator::{Outcome, OutputComparator};
pub use config::{ColorChoice, HarnessConfig};
pub use enumerator::{TestCase, discover_test_cases};
pub use errors::SetupError;
pub use executor::{ExecError, ExecutionResult, ProcessExecutor, TestExecutor};
pub use locator::locate_executable;
pub use reporter::{ConsoleReporter, Summary, TestReporter};

/// Run the whole suite described by `config`.
///
/// Returns the final [`Summary`] once every case has been reported, or a
/// [`SetupError`] if the target or the corpus cannot be found.
#[tracing::instrument(skip_all, fields(tests_dir = %config.tests_dir.display()))]
pub fn run_suite(
    config: &HarnessConfig,
    executor: &dyn TestExecutor,
    reporter: &mut dyn TestReporter,
) -> Result<Summary, SetupError> {
    let exe = locate_executable(&config.candidates)?;
    let cases = discover_test_cases(&config.tests_dir)?;

    reporter.on_run_start(&exe);

    let comparator =
        OutputComparator::new(&config.answers_dir, config.reference_suffix.as_str()).with_diff(config.verbose);

    let mut summary = Summary::default();
    for case in &cases {
        let (outcome, run) = run_case(&exe, case, executor, &comparator);
        summary.record(&outcome);
        reporter.on_test_complete(case, &outcome, run.as_ref());
    }

    tracing::debug!(passed = summary.passed, failed = summary.failed, "run complete");
    reporter.on_run_complete(&summary);
    Ok(summary)
}

/// Run and judge one case. Never fails: every problem is an [`Outcome`].
pub fn run_case(
    exe: &Path,
    case: &TestCase,
    executor: &dyn TestExecutor,
    comparator: &OutputComparator,
) -> (Outcome, Option<ExecutionResult>) {
    if let Some(missing) = comparator.check_reference(case) {
        return (missing, None);
    }

    match executor.execute(exe, case) {
        Ok(run) => (comparator.compare(case, &run), Some(run)),
        Err(e) => {
            tracing::debug!(test = case.name(), error = %e, "spawn failed");
            (Outcome::FailSpawnError(e.to_string()), None)
        }
    }
}
