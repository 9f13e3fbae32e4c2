use cataas_client::ClientError;
use thiserror::Error;

/// Aggregation-level failures.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// First upstream failure hit while building the batch.
    #[error("Upstream error: {0}")]
    Upstream(#[source] ClientError),

    #[error("Invalid result count {count}: must be between 1 and {max}")]
    InvalidCount { count: usize, max: usize },
}
