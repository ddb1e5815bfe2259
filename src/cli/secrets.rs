//! Secret management commands.
//!
//! Thin handlers: call one client operation, print the outcome as JSON.

use serde_json::json;
use tracing::info;
use zeroize::Zeroize;

use crate::cli::output;
use crate::error::Result;
use crate::github::Client;

/// List secret metadata for a repository.
pub fn list(client: &Client, owner: &str, repo: &str) -> Result<()> {
    info!("listing secrets for {}/{}", owner, repo);
    let secrets = client.list_secrets(owner, repo)?;
    output::json(&secrets)
}

/// Show metadata for a single secret.
pub fn get(client: &Client, owner: &str, repo: &str, secret: &str) -> Result<()> {
    info!("fetching secret {} in {}/{}", secret, owner, repo);
    let meta = client.get_secret(owner, repo, secret)?;
    output::json(&meta)
}

/// Create or update a secret. The plaintext is wiped before returning,
/// whether the upsert succeeded or not.
pub fn create(
    client: &Client,
    owner: &str,
    repo: &str,
    secret: &str,
    value: &mut String,
) -> Result<()> {
    info!("upserting secret {} in {}/{}", secret, owner, repo);
    // Wipe the plaintext whether or not the upsert succeeded
    let outcome = client.upsert_secret(owner, repo, secret, value);
    value.zeroize();
    let outcome = outcome?;

    output::json(&json!({
        "secret": secret,
        "created": outcome.created,
        "action": if outcome.created { "created" } else { "updated" },
    }))
}

/// Delete a secret.
pub fn delete(client: &Client, owner: &str, repo: &str, secret: &str) -> Result<()> {
    info!("deleting secret {} in {}/{}", secret, owner, repo);
    let outcome = client.delete_secret(owner, repo, secret)?;

    output::json(&json!({
        "secret": secret,
        "deleted": outcome.deleted,
        "action": "delete",
    }))
}
