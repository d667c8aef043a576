//! The `rename` subcommand: bulk rename through the editor.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use lsedit_common::{Entry, EntryKind, ScratchMode, abbreviate_home, scratch_dir};
use lsedit_engine::{apply_renames, edit_file, plan_renames, resolve_default_editor};
use lsedit_manifest::{ManifestFile, ManifestStyle};

use crate::cli::RenameArgs;
use crate::exit;
use crate::prompt;

const RENAME_HEADER: &str = "\
# lsedit - Rename files in bulk\n\
# Edit the file names, save, and quit the editor (you will be\n\
# asked for confirmation).\n\
# Quit the editor without saving to cancel the operation.\n\n";

/// Run the rename pipeline with the interactive confirmation prompt.
pub fn run(args: &RenameArgs, scratch: ScratchMode) -> Result<i32> {
    run_with_confirm(args, scratch, prompt::confirm)
}

fn run_with_confirm(
    args: &RenameArgs,
    scratch: ScratchMode,
    confirm: impl Fn(&str) -> io::Result<bool>,
) -> Result<i32> {
    let workspace_root = std::env::current_dir().context("Failed to resolve current directory")?;

    let entries = prepare_entries(&args.paths);
    if entries.is_empty() {
        bail!("No valid file names to rename");
    }
    let originals: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    let scratch_dir = scratch_dir(scratch)?;
    let manifest = ManifestFile::create(&scratch_dir, RENAME_HEADER, &entries, ManifestStyle::Plain)?;

    let editor = resolve_default_editor()?;
    edit_file(&editor, manifest.path())?;

    if !manifest.modified_since_write()? {
        println!("Nothing to do");
        return Ok(exit::SUCCESS);
    }

    let edited = manifest.read_back()?;
    let pairs = plan_renames(&originals, &edited)?;
    if pairs.is_empty() {
        println!("Nothing to do");
        return Ok(exit::SUCCESS);
    }

    for pair in &pairs {
        println!(
            "{} -> {}",
            abbreviate_home(Path::new(&pair.from)),
            abbreviate_home(Path::new(&pair.to))
        );
    }

    if !confirm("Continue? [y/N] ")? {
        debug!("user declined, nothing renamed");
        return Ok(exit::SUCCESS);
    }

    let report = apply_renames(&pairs, &workspace_root);
    for failure in report.failures() {
        eprintln!(
            "lsedit: Cannot rename '{}' to '{}': {}",
            failure.from,
            failure.to,
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

/// Turn the raw path arguments into entries, skipping ones that do not
/// exist.
///
/// Arguments reaching into the current or parent directory (`./x`,
/// `../x`) are resolved to full paths first, so the listing shows where
/// the rename actually lands.
fn prepare_entries(raw_paths: &[String]) -> Vec<Entry> {
    let mut entries = Vec::new();

    for raw in raw_paths {
        let path = if raw.starts_with("./") || raw.starts_with("../") {
            match fs::canonicalize(raw) {
                Ok(resolved) => resolved.display().to_string(),
                Err(error) => {
                    eprintln!("lsedit: '{raw}': {error}");
                    continue;
                }
            }
        } else {
            raw.clone()
        };

        match fs::symlink_metadata(&path) {
            Ok(metadata) => {
                let kind = EntryKind::from_file_type(metadata.file_type());
                entries.push(Entry::new(path, kind));
            }
            Err(error) => eprintln!("lsedit: '{path}': {error}"),
        }
    }

    entries
}
