//! Editable listing files (manifests) for lsedit.
//!
//! A manifest is a temporary text file holding one entry name per line,
//! preceded by a `#`-comment header with instructions for the user. The
//! file is handed to an editor and read back afterwards; this crate owns
//! writing, parsing, and no-op detection.
//!
//! Two invariants matter:
//! - line *i* of the manifest corresponds to entry *i* of the original
//!   enumeration for the whole lifetime of the file;
//! - the backing temporary file never outlives one invocation. The
//!   [`ManifestFile`] owns a [`tempfile::TempPath`], so the file is
//!   unlinked on drop no matter which way the invocation exits.

mod change;
mod error;
mod marker;
mod parser;
mod writer;

pub use change::ChangeSnapshot;
pub use error::ManifestError;
pub use marker::{ManifestStyle, marker_char, strip_marker};
pub use parser::{count_entry_lines, read_entry_names};
pub use writer::ManifestFile;
