//! The removal primitive.
//!
//! Takes the computed path list and removes each entry best-effort,
//! aggregating per-path failures into the report instead of stopping.

use std::path::{Path, PathBuf};

use lsedit_common::workspace::intersects_root;
use tracing::warn;

/// Outcome of one attempted removal.
#[derive(Debug, Clone)]
pub struct RemoveOutcome {
    /// The path that was removed (or not).
    pub path: PathBuf,
    /// The failure, if the entry could not be removed.
    pub error: Option<String>,
}

impl RemoveOutcome {
    /// Whether this entry was removed.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Report of a removal batch.
#[derive(Debug, Clone)]
pub struct RemoveReport {
    /// Per-path outcomes, in application order.
    pub outcomes: Vec<RemoveOutcome>,
    /// Whether any removed path fell inside the workspace root.
    pub touched_workspace: bool,
}

impl RemoveReport {
    /// Number of entries that were removed.
    pub fn removed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success()).count()
    }

    /// Whether every entry was removed.
    pub fn all_successful(&self) -> bool {
        self.outcomes.iter().all(|o| o.success())
    }

    /// The outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RemoveOutcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!("{} file(s) removed", self.removed())
    }
}

/// Remove every path in `paths`, continuing past individual failures.
///
/// Directories are removed recursively; everything else (files, links,
/// sockets, pipes) is unlinked. Symbolic links are never followed.
pub fn remove_paths(paths: &[PathBuf], workspace_root: &Path) -> RemoveReport {
    let mut outcomes = Vec::with_capacity(paths.len());
    let mut touched_workspace = false;

    for path in paths {
        let result = remove_entry(path);

        if result.is_ok() && intersects_root(workspace_root, path) {
            touched_workspace = true;
        }

        if let Err(ref error) = result {
            warn!(path = %path.display(), %error, "removal failed");
        }

        outcomes.push(RemoveOutcome {
            path: path.clone(),
            error: result.err().map(|e| e.to_string()),
        });
    }

    RemoveReport {
        outcomes,
        touched_workspace,
    }
}

fn remove_entry(path: &Path) -> std::io::Result<()> {
    let metadata = std::fs::symlink_metadata(path)?;

    if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}
