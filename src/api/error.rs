//! Error handling for the daemon API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An error status returned by the daemon.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A response body that is not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The requested record key is absent from the snapshot.
    #[error("record {0} not present in snapshot")]
    MissingRecord(String),
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
}
