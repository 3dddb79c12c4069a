//! Test case discovery
//!
//! A test case is any regular file directly inside the tests directory. There is
//! no recursion and no extension filter; run order is sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SetupError;

/// One input file, paired by name with its reference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    input: PathBuf,
    name: String,
}

impl TestCase {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        Self { input, name }
    }

    /// Path handed to the target as its sole argument
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Base file name, used in report lines
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference file name: the base name with `suffix` appended (`add.pcl` -> `add.pcl.out`)
    pub fn reference_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }

    pub fn reference_path(&self, answers_dir: &Path, suffix: &str) -> PathBuf {
        answers_dir.join(self.reference_name(suffix))
    }
}

/// List the test cases in `dir`, sorted by file name.
pub fn discover_test_cases(dir: &Path) -> Result<Vec<TestCase>, SetupError> {
    if !dir.is_dir() {
        return Err(SetupError::tests_dir_missing(dir));
    }

    let unreadable = |source| SetupError::TestsDirUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        // Follows symlinks, so a link to a regular file counts as a test case
        if path.is_file() {
            cases.push(TestCase::new(path));
        }
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = cases.len(), "collected test cases");
    Ok(cases)
}
