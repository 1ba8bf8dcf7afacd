//! Herald CLI
//!
//! Serve, export and validate product update timelines.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use herald_cli::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await?;
    Ok(())
}
