use thiserror::Error;

/// Failures talking to the tracker API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("Server error {status}: {body}")]
    BadStatus { status: u16, body: String },
    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn bad_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            body
        };
        ApiError::BadStatus { status, body }
    }
}
