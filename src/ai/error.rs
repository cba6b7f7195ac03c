use thiserror::Error;

/// Failure categories at the text-generation boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// The client never initialized (missing credentials, HTTP client setup failure)
    #[error("AI client is not initialized")]
    Unavailable,

    /// The request did not complete (DNS, connection, TLS, I/O)
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded or carried no text
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AiError::InvalidResponse(err.to_string())
        } else {
            AiError::Request(err.to_string())
        }
    }
}
