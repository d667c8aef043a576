//! Resolution of the `remove` command's parameters.
//!
//! The first parameter is dual-purpose: it may name the directory to
//! operate on, or the application to edit the listing with. The ambiguity
//! is resolved exactly once, here, into a tagged value - nothing
//! downstream probes the filesystem to guess what a string meant.

use std::io;
use std::path::PathBuf;

use lsedit_common::{LookupError, resolve_executable};
use thiserror::Error;

/// Errors produced while resolving target and application parameters.
///
/// All of these abort the invocation before any temporary file exists.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The first parameter is neither a directory nor an executable name.
    #[error("Invalid target '{given}': {source}")]
    InvalidTarget {
        given: String,
        #[source]
        source: io::Error,
    },

    /// A parameter that must name an application does not resolve.
    #[error("Invalid application: {source}")]
    InvalidApplication {
        #[source]
        source: LookupError,
    },

    /// The explicit target directory holds no real entries.
    #[error("'{path}': Directory empty")]
    EmptyTarget { path: PathBuf },
}

/// What a single dual-purpose parameter turned out to mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetParam {
    /// No parameter: operate on the ambient workspace listing.
    Ambient,
    /// The parameter is a directory to enumerate.
    Directory(PathBuf),
    /// The parameter is an application, resolved to its executable.
    Application(PathBuf),
}

/// The directory a removal operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    /// The ambient workspace listing, as already captured by the caller.
    Ambient,
    /// An explicit directory, re-enumerated for this invocation.
    Directory(PathBuf),
}

/// A fully resolved `remove` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveRequest {
    /// Where the candidate entries come from.
    pub target: RemoveTarget,
    /// The editor to use, when one was named explicitly.
    pub application: Option<PathBuf>,
}

/// Classify one dual-purpose parameter.
///
/// A directory wins over an executable of the same name; a single
/// trailing `/` is dropped from directory parameters so later joins stay
/// clean.
pub fn classify_parameter(given: &str) -> Result<TargetParam, TargetError> {
    if given.is_empty() {
        return Ok(TargetParam::Ambient);
    }

    match std::fs::metadata(given) {
        Ok(metadata) if metadata.is_dir() => {
            let trimmed = if given.len() > 1 && given.ends_with('/') {
                &given[..given.len() - 1]
            } else {
                given
            };
            Ok(TargetParam::Directory(PathBuf::from(trimmed)))
        }
        stat_result => match resolve_executable(given) {
            Ok(program) => Ok(TargetParam::Application(program)),
            Err(_) => {
                // Report why the directory interpretation failed: the path
                // exists but is not a directory, or it does not exist.
                let kind = if stat_result.is_ok() {
                    io::ErrorKind::NotADirectory
                } else {
                    io::ErrorKind::NotFound
                };
                Err(TargetError::InvalidTarget {
                    given: given.to_string(),
                    source: io::Error::from(kind),
                })
            }
        },
    }
}

/// Resolve the `remove` command's `[target] [application]` parameters.
///
/// - no first parameter: ambient target, associated editor;
/// - first parameter is a directory: explicit target;
/// - first parameter is an executable: ambient target, that editor;
/// - otherwise: [`TargetError::InvalidTarget`].
///
/// A second parameter must resolve to an executable, or the invocation
/// fails with [`TargetError::InvalidApplication`].
pub fn resolve_remove_request(
    first: Option<&str>,
    second: Option<&str>,
) -> Result<RemoveRequest, TargetError> {
    let param = match first {
        None => TargetParam::Ambient,
        Some(given) => classify_parameter(given)?,
    };

    let (target, application) = match param {
        TargetParam::Ambient => (RemoveTarget::Ambient, None),
        TargetParam::Directory(path) => (RemoveTarget::Directory(path), None),
        TargetParam::Application(program) => (RemoveTarget::Ambient, Some(program)),
    };

    // An application named as the second parameter overrides nothing; it
    // is only meaningful when the first parameter was the target.
    let application = match (application, second) {
        (Some(program), _) => Some(program),
        (None, Some(name)) => Some(
            resolve_executable(name)
                .map_err(|source| TargetError::InvalidApplication { source })?,
        ),
        (None, None) => None,
    };

    Ok(RemoveRequest {
        target,
        application,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_parameters_mean_ambient_listing_and_associated_editor() {
        let request = resolve_remove_request(None, None).unwrap();
        assert_eq!(request.target, RemoveTarget::Ambient);
        assert_eq!(request.application, None);
    }

    #[test]
    fn a_directory_parameter_becomes_the_target() {
        let temp = tempfile::TempDir::new().unwrap();
        let given = format!("{}/", temp.path().display());

        let request = resolve_remove_request(Some(&given), None).unwrap();
        assert_eq!(
            request.target,
            RemoveTarget::Directory(temp.path().to_path_buf())
        );
    }

    #[test]
    fn an_executable_parameter_becomes_the_application() {
        let request = resolve_remove_request(Some("sh"), None).unwrap();
        assert_eq!(request.target, RemoveTarget::Ambient);
        assert!(request.application.is_some());
    }

    #[test]
    fn a_nonexistent_parameter_is_an_invalid_target() {
        let err = resolve_remove_request(Some("/no/such/thing"), None).unwrap_err();
        match err {
            TargetError::InvalidTarget { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn a_plain_file_parameter_reports_not_a_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("plain");
        std::fs::write(&file, "x").unwrap();

        let err = resolve_remove_request(Some(file.to_str().unwrap()), None).unwrap_err();
        match err {
            TargetError::InvalidTarget { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotADirectory);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn a_bad_second_parameter_is_an_invalid_application() {
        let temp = tempfile::TempDir::new().unwrap();
        let given = temp.path().to_str().unwrap().to_string();

        let err =
            resolve_remove_request(Some(&given), Some("lsedit-no-such-editor")).unwrap_err();
        assert!(matches!(err, TargetError::InvalidApplication { .. }));
    }

    #[test]
    fn a_valid_second_parameter_resolves() {
        let temp = tempfile::TempDir::new().unwrap();
        let given = temp.path().to_str().unwrap().to_string();

        let request = resolve_remove_request(Some(&given), Some("sh")).unwrap();
        assert!(matches!(request.target, RemoveTarget::Directory(_)));
        assert!(request.application.is_some());
    }
}
