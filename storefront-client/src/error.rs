//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body returned by the server
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(AppError),

    /// Rejected locally, nothing was sent
    #[error("Validation error {}: {}", .0.code, .0.message)]
    Validation(AppError),

    /// Response that is neither the expected payload nor an error body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Error code for server and local validation errors
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api(e) | ClientError::Validation(e) => Some(e.code),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
