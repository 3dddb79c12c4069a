//! Fatal setup errors
//!
//! Only conditions that make the whole run impossible live here. Everything that
//! can go wrong with a single test case is an [`Outcome`](super::comparator::Outcome).

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort the run before any test case executes
#[derive(Debug, Error, Diagnostic)]
pub enum SetupError {
    #[error("ParaCL executable not found in the following paths:{}", format_paths(.tried))]
    #[diagnostic(
        code(paracl_ete::executable_not_found),
        help("the project is probably not built; build it or pass --exe <PATH>")
    )]
    ExecutableNotFound { tried: Vec<PathBuf> },

    #[error("tests not found at {}", .path.display())]
    #[diagnostic(code(paracl_ete::tests_dir_missing), help("pass --tests-dir <DIR> to point at the corpus"))]
    TestsDirMissing { path: PathBuf },

    #[error("failed to list tests in {}: {source}", .path.display())]
    #[diagnostic(code(paracl_ete::tests_dir_unreadable))]
    TestsDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| format!("\n  {}", p.display())).collect()
}

impl SetupError {
    pub fn tests_dir_missing(path: &Path) -> Self {
        SetupError::TestsDirMissing { path: path.to_path_buf() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_every_candidate() {
        let err = SetupError::ExecutableNotFound {
            tried: vec![PathBuf::from("build/ParaCL"), PathBuf::from("build-debug/ParaCL")],
        };
        assert_eq!(
            err.to_string(),
            "ParaCL executable not found in the following paths:\n  build/ParaCL\n  build-debug/ParaCL"
        );
    }

    #[test]
    fn test_tests_dir_missing_message() {
        let err = SetupError::tests_dir_missing(Path::new("../../examples"));
        assert_eq!(err.to_string(), "tests not found at ../../examples");
    }
}
