//! GitHub Actions Secrets API client.
//!
//! One blocking request per operation; create/update additionally fetches the
//! repository public key and seals the value before submitting. The key fetch
//! and the submission always run against the same (owner, repo), inside one
//! call, so a key can never be paired with a different repository's secret.

use std::time::Duration;

use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto;
use crate::error::{Error, Result};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// The repository's current public encryption key.
///
/// Fetched fresh for every create/update call and discarded afterwards;
/// never cached.
#[derive(Debug, Deserialize)]
pub struct PublicKeyRecord {
    /// Base64-encoded X25519 public key.
    pub key: String,
    /// Opaque identifier the remote uses to pick the decryption key.
    pub key_id: String,
}

/// Body of a secret create/update request.
#[derive(Debug, Serialize)]
struct SecretPayload<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
}

/// Secret metadata as returned by the list and get endpoints. Values are
/// never returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct SecretMeta {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response of the list endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SecretList {
    pub total_count: u64,
    pub secrets: Vec<SecretMeta>,
}

/// Outcome of a create/update: 201 means created, 204 means overwritten.
#[derive(Debug, Serialize)]
pub struct UpsertOutcome {
    pub created: bool,
}

/// Outcome of a delete.
#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub deleted: bool,
}

/// Blocking client for repository secrets, authenticated with a bearer token
/// supplied explicitly at construction.
pub struct Client {
    http: reqwest::blocking::Client,
    api_base: String,
    token: String,
}

impl Client {
    /// Create a client with no request timeout (the transport blocks until
    /// the server responds or the connection fails).
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the underlying client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(token, None)
    }

    /// Create a client with an optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the underlying client cannot be built.
    pub fn with_timeout(token: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("ghsecrets/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
        })
    }

    /// Override the API base URL (primarily for tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn secrets_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/actions/secrets", self.api_base, owner, repo)
    }

    fn auth(&self) -> String {
        format!("token {}", self.token)
    }

    /// Turn an unexpected status into `Error::Remote`, keeping the raw body.
    fn check(response: Response, expected: StatusCode) -> Result<Response> {
        let status = response.status();
        if status != expected {
            return Err(Error::Remote {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(response)
    }

    /// Fetch the repository's current public encryption key.
    ///
    /// The key material is returned exactly as the remote provides it; any
    /// format problem surfaces later, during sealing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` for any status other than 200.
    pub fn public_key(&self, owner: &str, repo: &str) -> Result<PublicKeyRecord> {
        let url = format!("{}/public-key", self.secrets_url(owner, repo));
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;

        let record: PublicKeyRecord = Self::check(response, StatusCode::OK)?.json()?;
        debug!("fetched public key {}", record.key_id);
        Ok(record)
    }

    /// List secret metadata for a repository (names only, never values).
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` for any status other than 200.
    pub fn list_secrets(&self, owner: &str, repo: &str) -> Result<SecretList> {
        let url = self.secrets_url(owner, repo);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;

        Ok(Self::check(response, StatusCode::OK)?.json()?)
    }

    /// Fetch metadata for a single secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` for any status other than 200.
    pub fn get_secret(&self, owner: &str, repo: &str, name: &str) -> Result<SecretMeta> {
        let url = format!("{}/{}", self.secrets_url(owner, repo), name);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;

        Ok(Self::check(response, StatusCode::OK)?.json()?)
    }

    /// Create or update a secret: fetch the repository key, seal the value,
    /// submit the ciphertext with the key's identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyFormat` if the fetched key cannot be used for
    /// sealing, `Error::Remote` for any submission status other than 201
    /// (created) or 204 (updated).
    pub fn upsert_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        value: &str,
    ) -> Result<UpsertOutcome> {
        let record = self.public_key(owner, repo)?;
        let encrypted_value = crypto::seal(&record.key, value)?;

        let url = format!("{}/{}", self.secrets_url(owner, repo), name);
        debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&SecretPayload {
                encrypted_value: &encrypted_value,
                key_id: &record.key_id,
            })
            .send()?;

        match response.status() {
            StatusCode::CREATED => Ok(UpsertOutcome { created: true }),
            StatusCode::NO_CONTENT => Ok(UpsertOutcome { created: false }),
            status => Err(Error::Remote {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            }),
        }
    }

    /// Delete a secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` for any status other than 204.
    pub fn delete_secret(&self, owner: &str, repo: &str, name: &str) -> Result<DeleteOutcome> {
        let url = format!("{}/{}", self.secrets_url(owner, repo), name);
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;

        Self::check(response, StatusCode::NO_CONTENT)?;
        Ok(DeleteOutcome { deleted: true })
    }
}
