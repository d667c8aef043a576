//! The working half of lsedit: everything that happens around the
//! editable listing file.
//!
//! - [`target`] - resolving the `remove` command's dual-purpose
//!   target/application parameters into a tagged value
//! - [`editor`] - launching the user's editor and blocking until it exits
//! - [`reconcile`] - turning an edited listing back into concrete work:
//!   positional rename pairs, or a removal delta
//! - [`apply`] - executing renames, with a cross-device fallback
//! - [`remove`] - the best-effort removal primitive

pub mod apply;
pub mod editor;
pub mod reconcile;
pub mod remove;
pub mod target;

pub use apply::{RenameOutcome, RenameReport, apply_renames};
pub use editor::{EditorError, edit_file, resolve_default_editor};
pub use reconcile::{ReconcileError, RenamePair, plan_renames, removal_delta, removal_paths};
pub use remove::{RemoveOutcome, RemoveReport, remove_paths};
pub use target::{RemoveRequest, RemoveTarget, TargetError, TargetParam, resolve_remove_request};
