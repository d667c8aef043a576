//! No-op edit detection.

use std::path::Path;
use std::time::SystemTime;

use crate::error::ManifestError;

/// The manifest's state as captured right after writing, before the editor
/// runs.
///
/// The modification time is a fast path: an unchanged mtime means the
/// editor never saved. It is never the only line of defense - even when
/// the mtime differs, the reconcilers diff actual content, so an edit
/// within the filesystem's timestamp granularity still applies correctly.
#[derive(Debug, Clone, Copy)]
pub struct ChangeSnapshot {
    /// Modification time after the initial write.
    pub mtime: SystemTime,
    /// Number of entry lines written.
    pub entry_count: usize,
}

impl ChangeSnapshot {
    /// Whether the file at `path` still carries the captured modification
    /// time.
    pub fn mtime_unchanged(&self, path: &Path) -> Result<bool, ManifestError> {
        let metadata = std::fs::metadata(path).map_err(|source| ManifestError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        let mtime = metadata.modified().map_err(|source| ManifestError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(mtime == self.mtime)
    }
}
