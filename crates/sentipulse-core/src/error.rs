//! Error types for the Sentipulse client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared result alias for the entire application.
pub type Result<T> = std::result::Result<T, PulseError>;

/// A shared error type for the entire Sentipulse application.
///
/// Every asynchronous action boundary catches one of these and stores its
/// message locally; errors are never allowed to cross a view boundary or
/// crash the process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PulseError {
    /// Network-level failure before an HTTP status was received
    #[error("{message}")]
    Network { message: String },

    /// Non-success HTTP status. The message is the server-supplied `error`
    /// field when present, or a generic `Request failed (<status>)` string.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success payload that did not match the endpoint's expected shape
    #[error("Malformed response: {message}")]
    Decode { message: String },

    /// Client-local guard rejected the action before any network call
    #[error("{0}")]
    Validation(String),

    /// Configuration error (base URL, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (export file writing)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl PulseError {
    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a Status error with a server-supplied message
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a Status error with the generic fallback message
    pub fn request_failed(status: u16) -> Self {
        Self::Status {
            status,
            message: format!("Request failed ({status})"),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a Status error
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Check if this is a Decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The HTTP status code, if this error carries one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = PulseError::request_failed(502);
        assert_eq!(err.to_string(), "Request failed (502)");
        assert_eq!(err.http_status(), Some(502));
    }

    #[test]
    fn test_status_displays_server_message_verbatim() {
        let err = PulseError::status(401, "invalid credentials");
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_predicates() {
        assert!(PulseError::validation("no keyword").is_validation());
        assert!(PulseError::network("connection refused").is_network());
        assert!(PulseError::decode("missing field").is_decode());
        assert!(!PulseError::validation("x").is_status());
    }
}
