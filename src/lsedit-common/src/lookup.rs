//! Executable lookup on `PATH`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving an executable name.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The name did not resolve to an executable on `PATH`.
    #[error("'{name}': command not found")]
    NotFound { name: String },
}

/// Resolve `name` to the full path of an executable on `PATH`.
///
/// Absolute and relative paths are accepted as-is when they point at an
/// executable file.
pub fn resolve_executable(name: &str) -> Result<PathBuf, LookupError> {
    which::which(name).map_err(|_| LookupError::NotFound {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_a_common_shell() {
        // `sh` is present on any Unix test host.
        let path = resolve_executable("sh").unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn rejects_nonsense_names() {
        let err = resolve_executable("lsedit-no-such-binary-xyz").unwrap_err();
        assert!(err.to_string().contains("command not found"));
    }
}
