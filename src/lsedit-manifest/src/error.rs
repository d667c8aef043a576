//! Error types for manifest handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading a manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The temporary file could not be created.
    #[error("Failed to create listing file in {dir}: {source}")]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the manifest contents failed.
    #[error("Failed to write listing file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the manifest back failed.
    #[error("Failed to read listing file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file could not be examined.
    #[error("Failed to examine listing file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
