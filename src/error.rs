use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid public key: {0}")]
    KeyFormat(String),

    #[error("sealing failed: {0}")]
    Seal(String),

    #[error("remote returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
