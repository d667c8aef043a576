//! An explicit, owned snapshot of a directory listing.
//!
//! The snapshot is a plain value handed to the listing builder and the
//! reconcilers, so nothing in the pipeline reaches for process-global
//! state to learn what the working directory contains.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::entry::{Entry, EntryKind};

/// Errors produced while enumerating a directory.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The directory could not be read at all.
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be examined.
    #[error("Failed to examine entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A directory path together with the entries it contained when captured.
///
/// Entries are sorted lexicographically by name so repeated captures of an
/// unchanged directory produce identical snapshots. The `.` and `..`
/// pseudo-entries are never included.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl WorkspaceSnapshot {
    /// Enumerate `root` and capture its entries.
    pub fn capture(root: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let root = root.into();
        let mut entries = Vec::new();

        let read_dir = fs::read_dir(&root).map_err(|source| SnapshotError::ReadDir {
            path: root.clone(),
            source,
        })?;

        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|source| SnapshotError::ReadEntry {
                path: root.clone(),
                source,
            })?;

            let kind = match dir_entry.file_type() {
                Ok(file_type) => EntryKind::from_file_type(file_type),
                // The entry may have vanished between readdir and stat;
                // keep it listed rather than dropping it silently.
                Err(_) => EntryKind::Unknown,
            };

            entries.push(Entry::new(dir_entry.file_name().to_string_lossy(), kind));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(root = %root.display(), entries = entries.len(), "directory captured");

        Ok(Self { root, entries })
    }

    /// Build a snapshot from already-known parts.
    pub fn from_parts(root: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    /// The directory this snapshot describes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The captured entries, sorted by name.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Whether `path` falls under `root` once made absolute against it.
///
/// Relative paths are interpreted against `root` itself, matching how the
/// appliers treat names from an edited listing.
pub fn intersects_root(root: &Path, path: &Path) -> bool {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    normalize(&absolute).starts_with(normalize(root))
}

/// Resolve `.` and `..` components lexically, without touching the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn capture_sorts_entries_and_skips_pseudo_entries() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("zeta"), "").unwrap();
        fs::write(temp.path().join("alpha"), "").unwrap();
        fs::create_dir(temp.path().join("middle")).unwrap();

        let snapshot = WorkspaceSnapshot::capture(temp.path()).unwrap();
        let names: Vec<&str> = snapshot.entries().iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["alpha", "middle", "zeta"]);
        assert_eq!(snapshot.entries()[1].kind, EntryKind::Dir);
    }

    #[test]
    fn capture_of_missing_directory_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("absent");

        let err = WorkspaceSnapshot::capture(&missing).unwrap_err();
        assert!(matches!(err, SnapshotError::ReadDir { .. }));
    }

    #[test]
    fn intersects_root_handles_relative_and_absolute_paths() {
        let root = Path::new("/work/project");

        assert!(intersects_root(root, Path::new("notes.txt")));
        assert!(intersects_root(root, Path::new("/work/project/sub/file")));
        assert!(!intersects_root(root, Path::new("/work/other/file")));
        assert!(!intersects_root(root, Path::new("../outside")));
    }
}
