//! # herald-cli
//!
//! The `herald` command:
//! - `serve`: run the HTTP server
//! - `build`: export the site as static HTML
//! - `check`: validate content and report findings
//! - `config`: inspect or create the configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command, ConfigAction};
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Records from the `log` facade used by the library crates are forwarded.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Serve { bind } => commands::serve::run(config, bind).await,
        Command::Build { out } => commands::build::run(config, out).await.map(|_| ()),
        Command::Check { strict } => commands::check::run(config, strict).await.map(|_| ()),
        Command::Config { action } => {
            config_handlers::handle_config_command(config, action).map_err(Error::from)
        }
    }
}
