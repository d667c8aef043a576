//! The `remove` subcommand: pick entries for deletion in the editor.
//!
//! There is no separate confirmation step here; deleting a line from the
//! listing is itself the intent signal.

use anyhow::{Context, Result};

use lsedit_common::{ScratchMode, WorkspaceSnapshot, scratch_dir};
use lsedit_engine::{
    RemoveTarget, TargetError, edit_file, remove_paths, removal_delta, removal_paths,
    resolve_default_editor, resolve_remove_request,
};
use lsedit_manifest::{ManifestFile, ManifestStyle};

use crate::cli::RemoveArgs;
use crate::exit;

const REMOVE_HEADER: &str = "\
# lsedit - Remove files in bulk\n\
# Delete the lines of the files you want removed, save, and exit.\n\
# Quit the editor without saving to cancel the operation.\n\n";

/// Run the removal pipeline.
pub fn run(args: &RemoveArgs, scratch: ScratchMode) -> Result<i32> {
    let request = resolve_remove_request(args.target.as_deref(), args.application.as_deref())?;
    let workspace_root = std::env::current_dir().context("Failed to resolve current directory")?;

    let snapshot = match &request.target {
        RemoveTarget::Ambient => WorkspaceSnapshot::capture(&workspace_root)?,
        RemoveTarget::Directory(dir) => {
            let snapshot = WorkspaceSnapshot::capture(dir)?;
            if snapshot.is_empty() {
                return Err(TargetError::EmptyTarget { path: dir.clone() }.into());
            }
            snapshot
        }
    };

    let scratch_dir = scratch_dir(scratch)?;
    let manifest = ManifestFile::create(
        &scratch_dir,
        REMOVE_HEADER,
        snapshot.entries(),
        ManifestStyle::Marked,
    )?;

    let editor = match &request.application {
        Some(program) => program.clone(),
        None => resolve_default_editor()?,
    };
    edit_file(&editor, manifest.path())?;

    // Two independent no-op signals: an untouched mtime means the editor
    // never saved; a line count that has not shrunk means nothing was
    // picked for removal.
    if !manifest.modified_since_write()?
        || manifest.entry_line_count()? >= manifest.snapshot().entry_count
    {
        println!("Nothing to do");
        return Ok(exit::SUCCESS);
    }

    let kept = manifest.read_back()?;
    let doomed = removal_delta(snapshot.entries(), &kept);
    if doomed.is_empty() {
        println!("Nothing to do");
        return Ok(exit::SUCCESS);
    }

    let paths = removal_paths(&workspace_root, &request.target, &doomed);
    let report = remove_paths(&paths, &workspace_root);

    for failure in report.failures() {
        eprintln!(
            "lsedit: Cannot remove '{}': {}",
            failure.path.display(),
            failure.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!("{}", report.summary());
    if report.touched_workspace {
        println!("Working directory changed; refresh your listing");
    }

    Ok(if report.all_successful() {
        exit::SUCCESS
    } else {
        exit::FAILURE
    })
}
