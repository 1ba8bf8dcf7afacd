//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Herald - product update timelines
#[derive(Parser, Debug)]
#[command(name = "herald", version)]
#[command(about = "Serve or export product update timelines", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "HERALD_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
    /// Export the site as static HTML
    Build {
        /// Output directory, overriding `build.out_dir`
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load and validate content
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `herald config` subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `site.title`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
