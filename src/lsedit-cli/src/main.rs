//! lsedit - batch rename or remove files by editing a listing in your
//! editor.

use clap::Parser;

use lsedit_cli::cli::{Cli, Commands};
use lsedit_cli::{exit, remove_cmd, rename_cmd};
use lsedit_common::ScratchMode;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scratch = if cli.private {
        ScratchMode::Private
    } else {
        ScratchMode::Standard
    };

    let result = match &cli.command {
        Commands::Rename(args) => rename_cmd::run(args, scratch),
        Commands::Remove(args) => remove_cmd::run(args, scratch),
    };

    let code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("lsedit: {error:#}");
            exit::exit_code_for(&error)
        }
    };

    std::process::exit(code);
}

/// Route library tracing to stderr, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
