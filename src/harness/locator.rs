//! Target executable lookup

use std::path::{Path, PathBuf};

use super::errors::SetupError;

/// Return the first candidate that exists and is a regular file.
///
/// Candidates are tried strictly in order; the first hit wins even when a later
/// candidate is newer. On failure the error carries every path that was tried.
pub fn locate_executable(candidates: &[PathBuf]) -> Result<PathBuf, SetupError> {
    for candidate in candidates {
        let hit = is_regular_file(candidate);
        tracing::debug!(path = %candidate.display(), hit, "probing executable candidate");
        if hit {
            return Ok(candidate.clone());
        }
    }

    Err(SetupError::ExecutableNotFound {
        tried: candidates.to_vec(),
    })
}

fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
