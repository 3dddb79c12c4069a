//! Result reporting
//!
//! ## TestReporter Trait
//!
//! Reporting is separated from execution through the `TestReporter` trait. The
//! harness hands every hook typed values ([`Outcome`], [`Summary`]); colors and
//! diff text are produced here and nowhere else.

use std::io::{self, Write};
use std::path::Path;

use super::comparator::Outcome;
use super::enumerator::TestCase;
use super::executor::ExecutionResult;

const GREEN: &str = "\x1b[0;32m";
const RED: &str = "\x1b[0;31m";
const CLEAR: &str = "\x1b[0m";

/// Trait for reporting harness progress and results.
pub trait TestReporter {
    /// Called once the target executable has been located
    fn on_run_start(&mut self, _exe: &Path) {}

    /// Called once per test case, in enumeration order
    fn on_test_complete(&mut self, case: &TestCase, outcome: &Outcome, run: Option<&ExecutionResult>);

    /// Called after the last test case
    fn on_run_complete(&mut self, summary: &Summary);
}

/// Running pass/fail counters.
///
/// Every recorded outcome bumps exactly one counter, so `passed + failed` is
/// always the number of test cases processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// True when nothing failed, including an empty run
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Line-oriented console reporter
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    verbose: bool,
    color: bool,
}

impl ConsoleReporter {
    pub fn stdout(verbose: bool, color: bool) -> Self {
        Self::new(io::stdout(), verbose, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self { out, verbose, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, CLEAR)
        } else {
            text.to_string()
        }
    }

    // Write errors are ignored
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, exe: &Path) {
        self.line(&format!("Found executable: {}", exe.display()));
        self.line("Running END-TO-END tests");
    }

    fn on_test_complete(&mut self, case: &TestCase, outcome: &Outcome, run: Option<&ExecutionResult>) {
        let Some(reason) = outcome.reason() else {
            let status = self.paint(GREEN, &format!("Passed: {}", case.name()));
            self.line(&status);
            return;
        };

        let status = self.paint(RED, &format!(">>> Failed: {} ({})", case.name(), reason));
        self.line(&status);

        if !self.verbose {
            return;
        }

        match outcome {
            Outcome::FailExitCode(code) => {
                let detail = self.paint(RED, &format!("Exit code: {}", code));
                self.line(&detail);
            }
            Outcome::FailMismatch(Some(diff)) => {
                let header = self.paint(RED, "Differences:");
                self.line(&header);
                self.line(diff.trim_end_matches('\n'));
            }
            _ => {}
        }

        if let Some(run) = run.filter(|r| !r.stderr.trim().is_empty()) {
            self.line("Stderr:");
            self.line(run.stderr.trim_end());
        }
    }

    fn on_run_complete(&mut self, summary: &Summary) {
        self.line("");
        self.line("Results:");
        let passed = self.paint(GREEN, &format!("Passed: {}", summary.passed));
        self.line(&passed);
        let failed = self.paint(RED, &format!("Failed: {}", summary.failed));
        self.line(&failed);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(verbose: bool, color: bool, f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>)) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), verbose, color);
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_summary_counts_every_outcome_once() {
        let mut summary = Summary::default();
        for outcome in [
            Outcome::Pass,
            Outcome::FailExitCode(1),
            Outcome::FailMismatch(None),
            Outcome::FailMissingReference(PathBuf::from("a.out")),
            Outcome::FailReadReference("bad".into()),
            Outcome::FailSpawnError("gone".into()),
            Outcome::Pass,
        ] {
            summary.record(&outcome);
        }
        assert_eq!(summary, Summary { passed: 2, failed: 5 });
        assert_eq!(summary.total(), 7);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_empty_summary_is_success() {
        assert!(Summary::default().all_passed());
    }

    #[test]
    fn test_plain_report() {
        let out = render(false, false, |r| {
            r.on_run_start(Path::new("../../build/ParaCL"));
            r.on_test_complete(&TestCase::new("add.pcl"), &Outcome::Pass, None);
            r.on_test_complete(&TestCase::new("sub.pcl"), &Outcome::FailMismatch(None), None);
            r.on_test_complete(&TestCase::new("div.pcl"), &Outcome::FailExitCode(3), None);
            r.on_run_complete(&Summary { passed: 1, failed: 2 });
        });
        insta::assert_snapshot!(out, @r"
        Found executable: ../../build/ParaCL
        Running END-TO-END tests
        Passed: add.pcl
        >>> Failed: sub.pcl (output mismatch)
        >>> Failed: div.pcl (exit code 3)

        Results:
        Passed: 1
        Failed: 2
        ");
    }

    #[test]
    fn test_verbose_report_adds_details() {
        let run = ExecutionResult {
            stdout: String::new(),
            stderr: "division by zero\n".into(),
            exit_code: 1,
        };
        let out = render(true, false, |r| {
            r.on_test_complete(
                &TestCase::new("sub.pcl"),
                &Outcome::FailMismatch(Some("7   7\n3 | 2\n".into())),
                None,
            );
            r.on_test_complete(&TestCase::new("div.pcl"), &Outcome::FailExitCode(1), Some(&run));
        });
        insta::assert_snapshot!(out, @r"
        >>> Failed: sub.pcl (output mismatch)
        Differences:
        7   7
        3 | 2
        >>> Failed: div.pcl (exit code 1)
        Exit code: 1
        Stderr:
        division by zero
        ");
    }

    #[test]
    fn test_colored_status_lines() {
        let out = render(false, true, |r| {
            r.on_test_complete(&TestCase::new("add.pcl"), &Outcome::Pass, None);
            r.on_test_complete(&TestCase::new("sub.pcl"), &Outcome::FailSpawnError("failed to run x".into()), None);
        });
        assert_eq!(
            out,
            "\x1b[0;32mPassed: add.pcl\x1b[0m\n\x1b[0;31m>>> Failed: sub.pcl (failed to run x)\x1b[0m\n"
        );
    }
}
