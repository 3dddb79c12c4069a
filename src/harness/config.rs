//! Harness configuration
//!
//! Defaults reproduce the in-tree layout used by the ParaCL build: the harness
//! runs from `tests/end_to_end`, the interpreter lives in one of the build
//! directories two levels up, and the corpus lives in `examples/`.

use std::env;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Environment variable naming an explicit target executable.
pub const EXE_ENV_VAR: &str = "PARACL_EXE";

/// Default candidate paths for the target executable, in priority order.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "./../../build/ParaCL",
    "./../../build-release/ParaCL",
    "./../../build-debug/ParaCL",
    "./../../build/release/ParaCL",
    "./../../build/debug/ParaCL",
];

/// Default directory holding one input file per test case
pub const DEFAULT_TESTS_DIR: &str = "../../examples";

/// Default directory holding the golden reference files
pub const DEFAULT_ANSWERS_DIR: &str = "answers";

/// Suffix appended to an input's file name to form its reference file name
pub const DEFAULT_REFERENCE_SUFFIX: &str = ".out";

/// When to emit ANSI colors in the console report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the current process environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()) && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Configuration for one harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Candidate executable paths, tried in order
    pub candidates: Vec<PathBuf>,
    /// Directory with one input file per test case
    pub tests_dir: PathBuf,
    /// Directory with `<input name><suffix>` reference files
    pub answers_dir: PathBuf,
    /// Suffix for reference file names
    pub reference_suffix: String,
    /// Print exit codes and diffs for failing tests
    pub verbose: bool,
    /// Console color policy
    pub color: ColorChoice,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            tests_dir: PathBuf::from(DEFAULT_TESTS_DIR),
            answers_dir: PathBuf::from(DEFAULT_ANSWERS_DIR),
            reference_suffix: DEFAULT_REFERENCE_SUFFIX.to_string(),
            verbose: false,
            color: ColorChoice::Auto,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate list, preserving the given order
    pub fn with_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Try `path` before every other candidate
    pub fn with_priority_candidate(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, path.into());
        self
    }

    /// Prepend an explicit executable (the `PARACL_EXE` value) when present and non-empty
    pub fn with_exe_override(self, value: Option<OsString>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_priority_candidate(value),
            _ => self,
        }
    }

    /// Set the input directory
    pub fn with_tests_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.tests_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the reference directory
    pub fn with_answers_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.answers_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the reference file suffix
    pub fn with_reference_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.reference_suffix = suffix.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_keep_priority_order() {
        let config = HarnessConfig::default();
        assert_eq!(config.candidates.len(), 5);
        assert_eq!(config.candidates[0], PathBuf::from("./../../build/ParaCL"));
        assert_eq!(config.candidates[4], PathBuf::from("./../../build/debug/ParaCL"));
    }

    #[test]
    fn test_default_layout() {
        let config = HarnessConfig::new();
        assert_eq!(config.tests_dir, PathBuf::from("../../examples"));
        assert_eq!(config.answers_dir, PathBuf::from("answers"));
        assert_eq!(config.reference_suffix, ".out");
        assert!(!config.verbose);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_with_candidates_replaces_list() {
        let config = HarnessConfig::new().with_candidates(["b", "a"]);
        assert_eq!(config.candidates, vec![PathBuf::from("b"), PathBuf::from("a")]);
    }

    #[test]
    fn test_priority_candidate_goes_first() {
        let config = HarnessConfig::new().with_candidates(["a"]).with_priority_candidate("z");
        assert_eq!(config.candidates, vec![PathBuf::from("z"), PathBuf::from("a")]);
    }

    #[test]
    fn test_exe_override_ignores_empty_values() {
        let base = HarnessConfig::new().with_candidates(["a"]);
        assert_eq!(base.clone().with_exe_override(None).candidates, vec![PathBuf::from("a")]);
        assert_eq!(
            base.clone().with_exe_override(Some(OsString::new())).candidates,
            vec![PathBuf::from("a")]
        );
        assert_eq!(
            base.with_exe_override(Some(OsString::from("env/ParaCL"))).candidates,
            vec![PathBuf::from("env/ParaCL"), PathBuf::from("a")]
        );
    }

    #[test]
    fn test_fixed_color_choices() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }
}
