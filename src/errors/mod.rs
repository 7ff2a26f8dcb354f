//! Error types for the GroupShare files client and page.

use thiserror::Error;

/// Result type for GroupShare operations.
pub type GroupShareResult<T> = Result<T, GroupShareError>;

/// Top-level error type for the crate.
///
/// The page surfaces every failure as a single error panel showing the
/// `Display` string, so server-supplied messages (`Api`) carry no prefix
/// and render verbatim.
#[derive(Debug, Error)]
pub enum GroupShareError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request built client-side (missing identifier, bad header).
    #[error("Invalid request: {0}")]
    Request(String),

    /// Operation rejected by the server with a message.
    #[error("{message}")]
    Api {
        /// The server-supplied failure message.
        message: String,
    },

    /// Network failure before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The response body could not be understood.
    #[error("Invalid response: {0}")]
    Response(String),

    /// The downloaded payload could not be decoded.
    #[error("Invalid file content: {0}")]
    Content(String),

    /// The save collaborator failed to persist the file.
    #[error("Save failed: {0}")]
    Save(String),
}

impl GroupShareError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        GroupShareError::Configuration(msg.into())
    }

    /// Creates a client-side request error.
    pub fn request(msg: impl Into<String>) -> Self {
        GroupShareError::Request(msg.into())
    }

    /// Creates a server-rejection error from a server-supplied message.
    pub fn api(message: impl Into<String>) -> Self {
        GroupShareError::Api {
            message: message.into(),
        }
    }

    /// Creates a response-decoding error.
    pub fn response(msg: impl Into<String>) -> Self {
        GroupShareError::Response(msg.into())
    }

    /// Creates a content-decoding error.
    pub fn content(msg: impl Into<String>) -> Self {
        GroupShareError::Content(msg.into())
    }

    /// Creates a save error.
    pub fn save(msg: impl Into<String>) -> Self {
        GroupShareError::Save(msg.into())
    }
}

/// Transport-level failures, mapped onto [`GroupShareError`] at the client
/// boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout error.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Network(err.to_string())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<TransportError> for GroupShareError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(msg) => GroupShareError::Timeout(msg),
            TransportError::Network(msg) => GroupShareError::Network(msg),
            TransportError::Http(msg) => GroupShareError::Response(msg),
        }
    }
}
