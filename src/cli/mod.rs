//! Command-line interface.

pub mod output;
pub mod secrets;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::github::{Client, DEFAULT_API_BASE};

/// Manage GitHub Actions repository secrets.
#[derive(Parser)]
#[command(
    name = "ghsecrets",
    about = "Manage GitHub Actions repository secrets from the command line",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// API base URL
    #[arg(long = "api-url", global = true, default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// Request timeout in seconds (blocks indefinitely if omitted)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags identifying the target repository and the credential used to reach
/// it. Every subcommand requires all three.
#[derive(Args)]
pub struct Target {
    /// Access token with repo scope
    #[arg(long = "github_token")]
    pub github_token: String,

    /// Repository owner
    #[arg(long)]
    pub owner: String,

    /// Repository name
    #[arg(long)]
    pub repo: String,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List all secrets (names only) from a repo
    #[command(name = "listSecrets")]
    ListSecrets {
        #[command(flatten)]
        target: Target,
    },

    /// Create or update a secret in a repo
    #[command(name = "createSecret")]
    CreateSecret {
        #[command(flatten)]
        target: Target,
        /// Name of the secret to create/update
        #[arg(long)]
        secret: String,
        /// Secret value
        #[arg(long)]
        value: String,
    },

    /// Show metadata for a single secret (never its value)
    #[command(name = "getSecret")]
    GetSecret {
        #[command(flatten)]
        target: Target,
        /// Name of the secret to look up
        #[arg(long)]
        secret: String,
    },

    /// Delete a secret
    #[command(name = "deleteSecret")]
    DeleteSecret {
        #[command(flatten)]
        target: Target,
        /// Name of the secret to delete
        #[arg(long)]
        secret: String,
    },
}

/// Execute a command. The credential travels from the parsed flags into the
/// client constructor; nothing reads it from ambient state.
pub fn execute(command: Command, api_url: &str, timeout: Option<u64>) -> Result<()> {
    let timeout = timeout.map(Duration::from_secs);
    let client = |target: &Target| -> Result<Client> {
        Ok(Client::with_timeout(target.github_token.as_str(), timeout)?.with_api_base(api_url))
    };

    match command {
        Command::ListSecrets { target } => {
            secrets::list(&client(&target)?, &target.owner, &target.repo)
        }
        Command::CreateSecret {
            target,
            secret,
            mut value,
        } => secrets::create(
            &client(&target)?,
            &target.owner,
            &target.repo,
            &secret,
            &mut value,
        ),
        Command::GetSecret { target, secret } => {
            secrets::get(&client(&target)?, &target.owner, &target.repo, &secret)
        }
        Command::DeleteSecret { target, secret } => {
            secrets::delete(&client(&target)?, &target.owner, &target.repo, &secret)
        }
    }
}
