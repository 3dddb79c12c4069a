//! Golden output comparison
//!
//! ## Decision order
//!
//! 1. No reference file: [`Outcome::FailMissingReference`]
//! 2. Non-zero exit: [`Outcome::FailExitCode`], output is not looked at
//! 3. Reference unreadable: [`Outcome::FailReadReference`]
//! 4. Trimmed output equals trimmed reference: [`Outcome::Pass`], else [`Outcome::FailMismatch`]
//!
//! Only leading and trailing whitespace is insignificant. The mismatch diff is a
//! reporting aid and is rendered from the untrimmed texts.

use std::fs;
use std::path::PathBuf;

use super::diff;
use super::enumerator::TestCase;
use super::executor::ExecutionResult;

/// The classified result of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// The target exited with this non-zero code
    FailExitCode(i32),
    /// Output differs; carries a side-by-side diff when diagnostics were requested
    FailMismatch(Option<String>),
    /// No reference file at this path
    FailMissingReference(PathBuf),
    /// The reference file exists but could not be read
    FailReadReference(String),
    /// The target could not be run at all
    FailSpawnError(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// One-line failure reason, `None` for a pass.
    pub fn reason(&self) -> Option<String> {
        match self {
            Outcome::Pass => None,
            Outcome::FailExitCode(code) => Some(format!("exit code {}", code)),
            Outcome::FailMismatch(_) => Some("output mismatch".to_string()),
            Outcome::FailMissingReference(path) => Some(format!(
                "reference file {} not found",
                path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.to_string_lossy())
            )),
            Outcome::FailReadReference(msg) => Some(msg.clone()),
            Outcome::FailSpawnError(msg) => Some(msg.clone()),
        }
    }
}

/// Judges execution results against the reference directory
#[derive(Debug, Clone)]
pub struct OutputComparator {
    answers_dir: PathBuf,
    suffix: String,
    with_diff: bool,
}

impl OutputComparator {
    pub fn new(answers_dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            answers_dir: answers_dir.into(),
            suffix: suffix.into(),
            with_diff: false,
        }
    }

    /// Attach a side-by-side diff to mismatches
    pub fn with_diff(mut self, with_diff: bool) -> Self {
        self.with_diff = with_diff;
        self
    }

    pub fn reference_path(&self, case: &TestCase) -> PathBuf {
        case.reference_path(&self.answers_dir, &self.suffix)
    }

    /// Check the reference up front so a missing one is reported without running the target.
    pub fn check_reference(&self, case: &TestCase) -> Option<Outcome> {
        let path = self.reference_path(case);
        if path.is_file() {
            None
        } else {
            Some(Outcome::FailMissingReference(path))
        }
    }

    pub fn compare(&self, case: &TestCase, result: &ExecutionResult) -> Outcome {
        if let Some(missing) = self.check_reference(case) {
            return missing;
        }

        if !result.success() {
            return Outcome::FailExitCode(result.exit_code);
        }

        let path = self.reference_path(case);
        let expected = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                return Outcome::FailReadReference(format!(
                    "failed to open reference file {}: {}",
                    path.display(),
                    e
                ));
            }
        };

        let outcome = judge(&expected, &result.stdout, self.with_diff);
        tracing::debug!(test = case.name(), pass = outcome.is_pass(), "compared output");
        outcome
    }
}

/// Compare `actual` to `expected`, ignoring only surrounding whitespace.
pub fn judge(expected: &str, actual: &str, with_diff: bool) -> Outcome {
    if outputs_match(expected, actual) {
        Outcome::Pass
    } else {
        Outcome::FailMismatch(with_diff.then(|| diff::side_by_side(expected, actual)))
    }
}

pub fn outputs_match(expected: &str, actual: &str) -> bool {
    expected.trim() == actual.trim()
}
