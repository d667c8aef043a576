//! Directory entries and their kinds.

use std::fs::FileType;

/// The kind of a file-system entry.
///
/// Kinds exist so the editable listing can show what each name refers to;
/// they carry no meaning beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// A regular file.
    #[default]
    File,
    /// A directory.
    Dir,
    /// A symbolic link.
    Symlink,
    /// A Unix domain socket.
    Socket,
    /// A FIFO (named pipe).
    Fifo,
    /// Anything the platform reports that does not fit the above.
    Unknown,
}

impl EntryKind {
    /// Classify a [`FileType`] as reported by `symlink_metadata`.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            return Self::Symlink;
        }
        if file_type.is_dir() {
            return Self::Dir;
        }
        if file_type.is_file() {
            return Self::File;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_socket() {
                return Self::Socket;
            }
            if file_type.is_fifo() {
                return Self::Fifo;
            }
        }

        Self::Unknown
    }
}

/// A single named entry, as enumerated from a directory or given on the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry name (or path, for command-line arguments).
    pub name: String,
    /// The entry kind at enumeration time.
    pub kind: EntryKind,
}

impl Entry {
    /// Create an entry with the given name and kind.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
