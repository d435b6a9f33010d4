//! permalink - CLI for entity permalinks
//!
//! Encodes entity references into slugged paths, decodes ids back out of
//! path segments, and resolves incoming paths to their canonical form.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
