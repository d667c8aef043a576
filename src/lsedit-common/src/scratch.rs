//! Scratch-directory resolution for the editable listing file.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the standard scratch directory.
pub const SCRATCH_DIR_ENV: &str = "LSEDIT_SCRATCH_DIR";

/// Errors produced while resolving the scratch directory.
#[derive(Debug, Error)]
pub enum ScratchError {
    /// The scratch directory could not be created.
    #[error("Failed to create scratch directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the editable listing file is allowed to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScratchMode {
    /// The configured scratch directory (`LSEDIT_SCRATCH_DIR`, falling back
    /// to the per-user cache directory).
    #[default]
    Standard,
    /// Leave-no-trace mode: the system temporary directory, so nothing is
    /// written under the user's home.
    Private,
}

/// Resolve the scratch directory for `mode`, creating it when needed.
pub fn scratch_dir(mode: ScratchMode) -> Result<PathBuf, ScratchError> {
    let override_dir = env::var_os(SCRATCH_DIR_ENV).map(PathBuf::from);
    let dir = pick_scratch_dir(mode, override_dir);

    std::fs::create_dir_all(&dir).map_err(|source| ScratchError::Create {
        path: dir.clone(),
        source,
    })?;

    Ok(dir)
}

/// Pick the scratch directory without touching the filesystem.
fn pick_scratch_dir(mode: ScratchMode, override_dir: Option<PathBuf>) -> PathBuf {
    match mode {
        ScratchMode::Private => env::temp_dir(),
        ScratchMode::Standard => override_dir
            .or_else(|| dirs::cache_dir().map(|cache| cache.join("lsedit")))
            .unwrap_or_else(env::temp_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_mode_ignores_the_override() {
        let dir = pick_scratch_dir(ScratchMode::Private, Some(PathBuf::from("/elsewhere")));
        assert_eq!(dir, env::temp_dir());
    }

    #[test]
    fn standard_mode_prefers_the_override() {
        let dir = pick_scratch_dir(ScratchMode::Standard, Some(PathBuf::from("/elsewhere")));
        assert_eq!(dir, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn standard_mode_falls_back_to_cache_dir() {
        let dir = pick_scratch_dir(ScratchMode::Standard, None);
        if let Some(cache) = dirs::cache_dir() {
            assert_eq!(dir, cache.join("lsedit"));
        } else {
            assert_eq!(dir, env::temp_dir());
        }
    }

    #[test]
    fn scratch_dir_creates_the_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let nested = temp.path().join("deep").join("scratch");

        let dir = pick_scratch_dir(ScratchMode::Standard, Some(nested.clone()));
        std::fs::create_dir_all(&dir).unwrap();
        assert!(nested.is_dir());
    }
}
