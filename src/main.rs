//! ghsecrets - manage GitHub Actions repository secrets from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghsecrets::cli::output;
use ghsecrets::cli::{execute, Cli};
use ghsecrets::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GHSECRETS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghsecrets=debug")
        } else {
            EnvFilter::new("ghsecrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, &cli.api_url, cli.timeout) {
        let suggestion = match &e {
            Error::Remote { status: 401, .. } => Some("check that the token is valid"),
            Error::Remote { status: 403, .. } => Some("the token needs the `repo` scope"),
            Error::Remote { status: 404, .. } => {
                Some("check the owner/repo spelling and token access")
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
