//! Failure taxonomy for calls to the photo API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Error returned by [`super::api::PhotoApi`] methods and browser downloads.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// `msg` field from the error body, when the body carried one.
        message: Option<String>,
    },
    /// The response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A DOM operation needed to finish the call failed.
    #[error("browser operation failed: {0}")]
    Browser(String),
    /// The call needs a browser and this build has none.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling `msg` out of a JSON error body if present.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.msg)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// Whether the server rejected the credentials or token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Server-provided message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
