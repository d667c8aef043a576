//! Command-line argument structures.

use clap::{Args, Parser, Subcommand};

/// Batch-modify file-system entries through your text editor.
#[derive(Parser, Debug)]
#[command(name = "lsedit")]
#[command(author, version)]
#[command(about = "Batch rename or remove files by editing a listing in your editor")]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Leave no trace under the home directory: keep the editable listing
    /// in the system temporary directory
    #[arg(long, global = true, env = "LSEDIT_PRIVATE")]
    pub private: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two bulk operations.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename many files at once by editing their names
    Rename(RenameArgs),
    /// Pick directory entries for deletion by deleting their lines
    Remove(RemoveArgs),
}

/// Arguments for `lsedit rename`.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Paths to rename
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Arguments for `lsedit remove`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Directory whose entries are listed (defaults to the current
    /// directory); an executable name here is taken as the APPLICATION
    /// instead
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Application to edit the listing with (defaults to $VISUAL/$EDITOR)
    #[arg(value_name = "APPLICATION")]
    pub application: Option<String>,
}
