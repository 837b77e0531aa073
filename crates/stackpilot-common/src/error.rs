use thiserror::Error;

/// Errors raised while mapping CloudStack response values
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required value was absent; carries the kind of value expected
    #[error("Invalid argument: {0} must not be null")]
    InvalidArgument(&'static str),

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
