#![forbid(unsafe_code)]
//! ParaCL End-to-End Harness
//!
//! Runs a separately built ParaCL interpreter against a corpus of input files,
//! compares its stdout with golden references, and reports a pass/fail summary
//! whose exit code is suitable for CI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `harness` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Failure Policy
//!
//! Only setup can abort a run (no target executable, no tests directory). Anything that goes wrong with a single
//! test case is recorded as that case's [`Outcome`] and the run moves on.

pub mod cli;
pub mod harness;
pub mod version;

pub use harness::{
    ExecutionResult, HarnessConfig, Outcome, OutputComparator, SetupError, Summary, TestCase, TestExecutor,
    TestReporter, run_suite,
};
