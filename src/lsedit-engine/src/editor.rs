//! Launching the user's editor on the listing file.
//!
//! This is the single blocking point of an invocation: the process
//! suspends until the editor exits, matching the interactive nature of
//! the tool.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

/// Editors probed on `PATH` when neither `$VISUAL` nor `$EDITOR` is set.
const FALLBACK_EDITORS: [&str; 3] = ["nano", "vim", "vi"];

/// Errors produced while resolving or running the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// No editor could be resolved at all.
    #[error("No editor found: set $VISUAL or $EDITOR, or install nano, vim, or vi")]
    NoEditor,

    /// The editor process could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor exited abnormally.
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Resolve the editor to use when none was named explicitly.
///
/// `$VISUAL` wins over `$EDITOR`; with neither set, the first of
/// `nano`, `vim`, `vi` found on `PATH` is used.
pub fn resolve_default_editor() -> Result<PathBuf, EditorError> {
    for var in ["VISUAL", "EDITOR"] {
        if let Some(value) = env::var_os(var)
            && !value.is_empty()
        {
            return Ok(PathBuf::from(value));
        }
    }

    for candidate in FALLBACK_EDITORS {
        if let Ok(program) = which::which(candidate) {
            return Ok(program);
        }
    }

    Err(EditorError::NoEditor)
}

/// Run `editor` on `file` in the foreground and wait for it to exit.
pub fn edit_file(editor: &Path, file: &Path) -> Result<(), EditorError> {
    debug!(editor = %editor.display(), file = %file.display(), "launching editor");

    let status = Command::new(editor)
        .arg(file)
        .status()
        .map_err(|source| EditorError::Launch {
            program: editor.display().to_string(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::Failed {
            program: editor.display().to_string(),
            status,
        });
    }

    Ok(())
}
