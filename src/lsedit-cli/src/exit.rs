//! Mapping from the error taxonomy to process exit codes.

use lsedit_common::ScratchError;
use lsedit_engine::{EditorError, ReconcileError, TargetError};
use lsedit_manifest::ManifestError;

/// The batch completed with no unrecoverable error.
pub const SUCCESS: i32 = 0;
/// Some entries failed, or an uncategorized error occurred.
pub const FAILURE: i32 = 1;
/// Target or application parameter resolution failed.
pub const INVALID_PARAMETER: i32 = 2;
/// The explicit target directory has no real entries.
pub const EMPTY_TARGET: i32 = 3;
/// The temporary listing file could not be created, written, or read.
pub const TEMP_FILE: i32 = 4;
/// The editor failed to launch or exited abnormally.
pub const EDITOR: i32 = 5;
/// The edited listing's line count does not match the original.
pub const LINE_MISMATCH: i32 = 6;

/// Pick the exit code for a failed invocation.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if let Some(target) = error.downcast_ref::<TargetError>() {
        return match target {
            TargetError::InvalidTarget { .. } | TargetError::InvalidApplication { .. } => {
                INVALID_PARAMETER
            }
            TargetError::EmptyTarget { .. } => EMPTY_TARGET,
        };
    }
    if error.downcast_ref::<ManifestError>().is_some()
        || error.downcast_ref::<ScratchError>().is_some()
    {
        return TEMP_FILE;
    }
    if error.downcast_ref::<EditorError>().is_some() {
        return EDITOR;
    }
    if let Some(ReconcileError::LineMismatch { .. }) = error.downcast_ref::<ReconcileError>() {
        return LINE_MISMATCH;
    }

    FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_distinct_codes() {
        let invalid = anyhow::Error::new(TargetError::InvalidTarget {
            given: "x".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(exit_code_for(&invalid), INVALID_PARAMETER);

        let empty = anyhow::Error::new(TargetError::EmptyTarget {
            path: "x".into(),
        });
        assert_eq!(exit_code_for(&empty), EMPTY_TARGET);

        let mismatch = anyhow::Error::new(ReconcileError::LineMismatch {
            expected: 3,
            found: 2,
        });
        assert_eq!(exit_code_for(&mismatch), LINE_MISMATCH);

        let editor = anyhow::Error::new(EditorError::NoEditor);
        assert_eq!(exit_code_for(&editor), EDITOR);

        let other = anyhow::anyhow!("anything else");
        assert_eq!(exit_code_for(&other), FAILURE);
    }
}
