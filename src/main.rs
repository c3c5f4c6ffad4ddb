//! Main entry point for the protminer application.

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{run_cli, Cli};

fn main() -> Result<()> {
    // Initialize logging (e.g. RUST_LOG=debug for per-row detail)
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Run CLI
    run_cli(cli)?;

    Ok(())
}
