use thiserror::Error;

/// Errors raised while talking to the Cataas API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network failure or timeout reaching the service.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("Cataas API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
