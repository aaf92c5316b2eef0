//! Gantry - compose, edit, and export application environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gantry::cli::output;
use gantry::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GANTRY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gantry=debug")
        } else {
            EnvFilter::new("gantry=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.mode) {
        // Format error with suggestion if available
        let suggestion = match &e {
            gantry::error::Error::Config(gantry::error::ConfigError::NotInitialized) => {
                Some("run: gantry init")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
