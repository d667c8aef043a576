//! Executing a rename plan.
//!
//! Renames are best-effort: one failed pair is recorded and the batch
//! moves on, because the remaining pairs are independent operations the
//! user already confirmed. Only manifest-integrity problems (handled
//! before this point) abort a whole batch.

use std::io;
use std::path::Path;
use std::process::Command;

use lsedit_common::workspace::intersects_root;
use tracing::{debug, warn};

use crate::reconcile::RenamePair;

/// Outcome of one attempted rename.
#[derive(Debug, Clone)]
pub struct RenameOutcome {
    /// Source path.
    pub from: String,
    /// Destination path.
    pub to: String,
    /// The failure, if the pair could not be renamed.
    pub error: Option<String>,
}

impl RenameOutcome {
    /// Whether this pair was renamed.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Report of a rename batch.
#[derive(Debug, Clone)]
pub struct RenameReport {
    /// Per-pair outcomes, in application order.
    pub outcomes: Vec<RenameOutcome>,
    /// Whether any renamed path fell inside the workspace root, in which
    /// case the caller's listing is stale.
    pub touched_workspace: bool,
}

impl RenameReport {
    /// Number of pairs that were renamed.
    pub fn renamed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success()).count()
    }

    /// Whether every pair was renamed.
    pub fn all_successful(&self) -> bool {
        self.outcomes.iter().all(|o| o.success())
    }

    /// The outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RenameOutcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!("{} file(s) renamed", self.renamed())
    }
}

/// Apply every pair of `plan`, continuing past individual failures.
pub fn apply_renames(plan: &[RenamePair], workspace_root: &Path) -> RenameReport {
    let mut outcomes = Vec::with_capacity(plan.len());
    let mut touched_workspace = false;

    for pair in plan {
        let result = rename_entry(&pair.from, &pair.to);

        if result.is_ok()
            && (intersects_root(workspace_root, Path::new(&pair.from))
                || intersects_root(workspace_root, Path::new(&pair.to)))
        {
            touched_workspace = true;
        }

        if let Err(ref error) = result {
            warn!(from = %pair.from, to = %pair.to, %error, "rename failed");
        }

        outcomes.push(RenameOutcome {
            from: pair.from.clone(),
            to: pair.to.clone(),
            error: result.err().map(|e| e.to_string()),
        });
    }

    RenameReport {
        outcomes,
        touched_workspace,
    }
}

/// Rename one path, falling back to an external move when the source and
/// destination sit on different devices.
fn rename_entry(from: &str, to: &str) -> io::Result<()> {
    // Some rename(2) implementations reject a trailing slash on the
    // destination when renaming a directory.
    let to = if to.len() > 1 && to.ends_with('/') {
        &to[..to.len() - 1]
    } else {
        to
    };

    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::CrossesDevices => {
            debug!(%from, %to, "destination is on another device, delegating to mv");
            move_across_devices(from, to)
        }
        Err(error) => Err(error),
    }
}

/// Move `from` to `to` with the external `mv` helper, which copies and
/// deletes when it has to.
fn move_across_devices(from: &str, to: &str) -> io::Result<()> {
    let status = Command::new("mv").arg("--").arg(from).arg(to).status()?;

    if !status.success() {
        return Err(io::Error::other(format!("mv exited with {status}")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn pair(from: &Path, to: &Path) -> RenamePair {
        RenamePair {
            from: from.display().to_string(),
            to: to.display().to_string(),
        }
    }

    #[test]
    fn renames_every_pair() {
        let temp = tempfile::TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, "first").unwrap();
        fs::write(&b, "second").unwrap();

        let plan = vec![
            pair(&a, &temp.path().join("a2")),
            pair(&b, &temp.path().join("b2")),
        ];
        let report = apply_renames(&plan, temp.path());

        assert!(report.all_successful());
        assert_eq!(report.renamed(), 2);
        assert!(report.touched_workspace);
        assert!(temp.path().join("a2").exists());
        assert!(temp.path().join("b2").exists());
        assert!(!a.exists());
    }

    #[test]
    fn one_failure_does_not_stop_the_batch() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let real = temp.path().join("real");
        fs::write(&real, "x").unwrap();

        let plan = vec![
            pair(&missing, &temp.path().join("nowhere")),
            pair(&real, &temp.path().join("renamed")),
        ];
        let report = apply_renames(&plan, temp.path());

        assert!(!report.all_successful());
        assert_eq!(report.renamed(), 1);
        assert_eq!(report.failures().count(), 1);
        assert!(temp.path().join("renamed").exists());
    }

    #[test]
    fn a_trailing_slash_on_the_destination_is_tolerated() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("olddir");
        fs::create_dir(&dir).unwrap();

        let destination = format!("{}/", temp.path().join("newdir").display());
        let plan = vec![RenamePair {
            from: dir.display().to_string(),
            to: destination,
        }];
        let report = apply_renames(&plan, temp.path());

        assert!(report.all_successful());
        assert!(temp.path().join("newdir").is_dir());
    }

    #[test]
    fn renames_outside_the_workspace_leave_it_untouched() {
        let workspace = tempfile::TempDir::new().unwrap();
        let elsewhere = tempfile::TempDir::new().unwrap();
        let a = elsewhere.path().join("a");
        fs::write(&a, "x").unwrap();

        let plan = vec![pair(&a, &elsewhere.path().join("b"))];
        let report = apply_renames(&plan, workspace.path());

        assert!(report.all_successful());
        assert!(!report.touched_workspace);
    }

    #[cfg(unix)]
    #[test]
    fn the_external_move_helper_moves_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let from = temp.path().join("from");
        let to = temp.path().join("to");
        fs::write(&from, "payload").unwrap();

        move_across_devices(from.to_str().unwrap(), to.to_str().unwrap()).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "payload");
    }
}
