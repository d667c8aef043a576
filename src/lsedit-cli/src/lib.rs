//! lsedit command-line interface.
//!
//! Argument surface, pipeline orchestration for the two subcommands, the
//! confirmation prompt, and the error-to-exit-code mapping.

pub mod cli;
pub mod exit;
pub mod prompt;
pub mod remove_cmd;
pub mod rename_cmd;

pub use cli::{Cli, Commands, RemoveArgs, RenameArgs};
