//! Error types for the mercat client.
//!
//! This module provides a unified error type with explicit variants for
//! network transport failures, non-2xx HTTP responses, client-side input
//! validation, and session storage faults.

use std::fmt;
use thiserror::Error;

/// The unified error type for mercat operations.
///
/// Covers every failure mode of the client, with explicit variants so
/// callers can handle specific cases (e.g. a 401 versus a lost connection).
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failures where no response was received (DNS, TLS,
    /// connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The server responded with a non-2xx status.
    #[error("{0}")]
    Http(#[from] HttpError),

    /// Client-side validation failed before any request was dispatched.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Session storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid input (malformed base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors: the request never produced a response.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Other transport failure.
    #[error("transport failure: {message}")]
    Other { message: String },
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::Connection {
                message: err.to_string(),
            }
        } else {
            NetworkError::Other {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::from(err))
    }
}

/// A non-2xx HTTP response from the server.
///
/// The body is kept verbatim; [`HttpError::server_message`] extracts the
/// `error`/`message` field when the body is the API's JSON error format.
#[derive(Debug)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body (may be empty).
    pub body: String,
}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check whether this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }

    /// Extract the server-provided error message, if the body is JSON
    /// carrying an `error` or `message` field.
    pub fn server_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(message) = self.server_message() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

/// Client-side validation errors, detected before dispatch.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The stored token contains characters that cannot be sent in an
    /// HTTP header (e.g. a tampered session file).
    #[error("token contains characters not allowed in a header")]
    InvalidToken,
}

/// Session storage faults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted session could not be parsed.
    #[error("invalid session data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status() {
        let err = HttpError::new(404, "");
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn http_error_display_includes_server_message() {
        let err = HttpError::new(403, r#"{"error":"Access forbidden: insufficient privileges"}"#);
        assert_eq!(
            err.to_string(),
            "HTTP 403: Access forbidden: insufficient privileges"
        );
    }

    #[test]
    fn http_error_server_message_falls_back_to_message_field() {
        let err = HttpError::new(500, r#"{"message":"boom"}"#);
        assert_eq!(err.server_message().as_deref(), Some("boom"));
    }

    #[test]
    fn http_error_server_message_none_for_non_json() {
        let err = HttpError::new(502, "<html>bad gateway</html>");
        assert!(err.server_message().is_none());
    }

    #[test]
    fn auth_error_detection() {
        assert!(HttpError::new(401, "").is_auth_error());
        assert!(!HttpError::new(403, "").is_auth_error());
    }
}
