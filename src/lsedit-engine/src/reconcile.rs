//! Turning an edited listing back into concrete work.
//!
//! Rename and removal reconcile differently. Rename depends on position:
//! line *i* of the edited listing names what entry *i* should become, so
//! the line count must match exactly before anything is paired. Removal
//! depends on presence alone: an entry is doomed when its name no longer
//! appears anywhere in the edited listing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lsedit_common::Entry;
use thiserror::Error;

/// Errors produced during reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The edited listing does not hold exactly one line per original
    /// entry, so positional pairing would be unsafe to apply.
    #[error("Line mismatch in edited listing: expected {expected} entries, found {found}")]
    LineMismatch { expected: usize, found: usize },
}

/// One pending rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    /// The path as it is now.
    pub from: String,
    /// The path the user wants.
    pub to: String,
}

/// Pair original paths against edited lines by position and keep the ones
/// that changed.
///
/// Fails with [`ReconcileError::LineMismatch`] when the counts differ;
/// a partially shifted listing must never be applied.
pub fn plan_renames(
    originals: &[String],
    edited: &[String],
) -> Result<Vec<RenamePair>, ReconcileError> {
    if originals.len() != edited.len() {
        return Err(ReconcileError::LineMismatch {
            expected: originals.len(),
            found: edited.len(),
        });
    }

    let pairs = originals
        .iter()
        .zip(edited)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| RenamePair {
            from: from.clone(),
            to: to.clone(),
        })
        .collect();

    Ok(pairs)
}

/// The entries of `candidates` whose names no longer appear in `kept`.
///
/// The match is an exact string comparison. The `.` and `..`
/// pseudo-entries are never candidates, whatever the listing says.
pub fn removal_delta<'a>(candidates: &'a [Entry], kept: &[String]) -> Vec<&'a Entry> {
    let kept: HashSet<&str> = kept.iter().map(String::as_str).collect();

    candidates
        .iter()
        .filter(|entry| entry.name != "." && entry.name != "..")
        .filter(|entry| !kept.contains(entry.name.as_str()))
        .collect()
}

/// Reconstruct full paths for doomed entries.
///
/// Entries from the ambient listing live directly under the workspace
/// root. For an explicit target, an absolute target is used as-is and a
/// relative one is joined under the workspace root first.
pub fn removal_paths(
    workspace_root: &Path,
    target: &crate::target::RemoveTarget,
    doomed: &[&Entry],
) -> Vec<PathBuf> {
    let base: PathBuf = match target {
        crate::target::RemoveTarget::Ambient => workspace_root.to_path_buf(),
        crate::target::RemoveTarget::Directory(dir) => {
            if dir.is_absolute() {
                dir.clone()
            } else {
                workspace_root.join(dir)
            }
        }
    };

    doomed.iter().map(|entry| base.join(&entry.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::RemoveTarget;
    use lsedit_common::EntryKind;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn entries(list: &[&str]) -> Vec<Entry> {
        list.iter().map(|s| Entry::new(*s, EntryKind::File)).collect()
    }

    #[test]
    fn only_changed_positions_become_pairs() {
        let pairs = plan_renames(&names(&["a", "b", "c"]), &names(&["a", "x", "c"])).unwrap();

        assert_eq!(
            pairs,
            vec![RenamePair {
                from: "b".to_string(),
                to: "x".to_string(),
            }]
        );
    }

    #[test]
    fn identical_listings_plan_nothing() {
        let pairs = plan_renames(&names(&["a", "b"]), &names(&["a", "b"])).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn a_removed_line_is_a_mismatch() {
        let err = plan_renames(&names(&["a", "b", "c"]), &names(&["a", "c"])).unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::LineMismatch {
                expected: 3,
                found: 2,
            }
        ));
    }

    #[test]
    fn an_added_line_is_a_mismatch() {
        let err = plan_renames(&names(&["a"]), &names(&["a", "b"])).unwrap_err();
        assert!(matches!(err, ReconcileError::LineMismatch { .. }));
    }

    #[test]
    fn delta_keeps_only_missing_names() {
        let candidates = entries(&["f1", "f2", "f3"]);
        let doomed = removal_delta(&candidates, &names(&["f1", "f3"]));

        let doomed_names: Vec<&str> = doomed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(doomed_names, vec!["f2"]);
    }

    #[test]
    fn pseudo_entries_are_never_candidates() {
        let candidates = entries(&[".", "..", "real"]);
        let doomed = removal_delta(&candidates, &[]);

        let doomed_names: Vec<&str> = doomed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(doomed_names, vec!["real"]);
    }

    #[test]
    fn paths_join_under_the_right_base() {
        let candidates = entries(&["victim"]);
        let doomed = removal_delta(&candidates, &[]);
        let root = Path::new("/work");

        let ambient = removal_paths(root, &RemoveTarget::Ambient, &doomed);
        assert_eq!(ambient, vec![PathBuf::from("/work/victim")]);

        let absolute = removal_paths(
            root,
            &RemoveTarget::Directory(PathBuf::from("/data/inbox")),
            &doomed,
        );
        assert_eq!(absolute, vec![PathBuf::from("/data/inbox/victim")]);

        let relative = removal_paths(
            root,
            &RemoveTarget::Directory(PathBuf::from("inbox")),
            &doomed,
        );
        assert_eq!(relative, vec![PathBuf::from("/work/inbox/victim")]);
    }
}
