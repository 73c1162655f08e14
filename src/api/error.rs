//! Error handling for the menu API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a body that is not the expected JSON shape
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server rejected the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The request task died before producing a response.
    #[error("Request task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Task(_) => None,
        }
    }
}
