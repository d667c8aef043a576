//! Reading an edited manifest back into entry names.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ManifestError;
use crate::marker::{ManifestStyle, strip_marker};

/// Whether a manifest line names an entry.
///
/// Comment lines (`#`-prefixed) and blank lines are skipped entirely; they
/// do not consume a positional slot.
fn is_entry_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Read the entry names from a manifest file, in order.
///
/// For [`ManifestStyle::Marked`] manifests a single trailing kind marker
/// is stripped from each name. No name is checked for existence here.
pub fn read_entry_names(path: &Path, style: ManifestStyle) -> Result<Vec<String>, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !is_entry_line(&line) {
            continue;
        }

        let name = match style {
            ManifestStyle::Plain => line.as_str(),
            ManifestStyle::Marked => strip_marker(&line),
        };
        names.push(name.to_string());
    }

    Ok(names)
}

/// Count the non-comment, non-blank lines of a manifest file.
pub fn count_entry_lines(path: &Path) -> Result<usize, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if is_entry_line(&line) {
            count += 1;
        }
    }

    Ok(count)
}
