//! Shared types and utilities for lsedit.
//!
//! This crate holds the pieces every other lsedit crate needs:
//! - [`Entry`] / [`EntryKind`] - a named directory entry and its kind
//! - [`WorkspaceSnapshot`] - an explicit, owned listing of a directory
//! - Scratch-directory resolution for the editable listing file
//! - Executable lookup on `PATH`
//! - Path display helpers

pub mod display;
pub mod entry;
pub mod lookup;
pub mod scratch;
pub mod workspace;

pub use display::abbreviate_home;
pub use entry::{Entry, EntryKind};
pub use lookup::{LookupError, resolve_executable};
pub use scratch::{ScratchError, ScratchMode, scratch_dir};
pub use workspace::{SnapshotError, WorkspaceSnapshot};
