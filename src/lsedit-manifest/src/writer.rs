//! Writing a manifest file and handing it to the editor.

use std::io::Write;
use std::path::Path;

use lsedit_common::Entry;
use tempfile::TempPath;
use tracing::debug;

use crate::change::ChangeSnapshot;
use crate::error::ManifestError;
use crate::marker::{ManifestStyle, marker_char};
use crate::parser;

/// A manifest written to an exclusively owned temporary file.
///
/// The file name is collision-free, so concurrent invocations never share
/// a manifest. The write handle is closed as soon as the contents are on
/// disk; only the path is retained while the editor runs. Dropping the
/// `ManifestFile` unlinks the file, which covers every exit path -
/// completion, validation failure, editor failure, mismatch, or decline.
#[derive(Debug)]
pub struct ManifestFile {
    path: TempPath,
    style: ManifestStyle,
    snapshot: ChangeSnapshot,
}

impl ManifestFile {
    /// Write `entries` to a fresh temporary file under `dir`.
    ///
    /// The file starts with `header` (its lines must already be
    /// `#`-prefixed), followed by one entry name per line. In
    /// [`ManifestStyle::Marked`] manifests, non-regular entries carry a
    /// trailing kind marker.
    pub fn create(
        dir: &Path,
        header: &str,
        entries: &[Entry],
        style: ManifestStyle,
    ) -> Result<Self, ManifestError> {
        let mut file = tempfile::Builder::new()
            .prefix("lsedit.")
            .suffix(".list")
            .tempfile_in(dir)
            .map_err(|source| ManifestError::Create {
                dir: dir.to_path_buf(),
                source,
            })?;

        let file_path = file.path().to_path_buf();
        let write_err = |source| ManifestError::Write {
            path: file_path.clone(),
            source,
        };

        file.write_all(header.as_bytes()).map_err(write_err)?;
        for entry in entries {
            let marker = match style {
                ManifestStyle::Plain => None,
                ManifestStyle::Marked => marker_char(entry.kind),
            };
            match marker {
                Some(c) => writeln!(file, "{}{c}", entry.name).map_err(write_err)?,
                None => writeln!(file, "{}", entry.name).map_err(write_err)?,
            }
        }
        file.flush().map_err(write_err)?;

        // Capture the modification time while the write handle is still
        // open; it is compared against the post-editor mtime later.
        let stat_err = |source| ManifestError::Stat {
            path: file_path.clone(),
            source,
        };
        let metadata = file.as_file().metadata().map_err(stat_err)?;
        let mtime = metadata.modified().map_err(stat_err)?;

        let snapshot = ChangeSnapshot {
            mtime,
            entry_count: entries.len(),
        };

        // Close the handle; the editor gets the path, not the descriptor.
        let path = file.into_temp_path();
        debug!(path = %path.display(), entries = snapshot.entry_count, "listing file written");

        Ok(Self {
            path,
            style,
            snapshot,
        })
    }

    /// Path of the backing temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The state captured right after writing.
    pub fn snapshot(&self) -> &ChangeSnapshot {
        &self.snapshot
    }

    /// Whether the file was modified since it was written.
    pub fn modified_since_write(&self) -> Result<bool, ManifestError> {
        Ok(!self.snapshot.mtime_unchanged(&self.path)?)
    }

    /// Count the entry lines the file holds now.
    pub fn entry_line_count(&self) -> Result<usize, ManifestError> {
        parser::count_entry_lines(&self.path)
    }

    /// Read the edited entry names back, in order.
    pub fn read_back(&self) -> Result<Vec<String>, ManifestError> {
        parser::read_entry_names(&self.path, self.style)
    }
}
