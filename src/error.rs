//! # Client Error Types
//!
//! Every failure a resource operation can surface. Errors are never retried
//! or recovered locally; they propagate to the caller unchanged.

use paths::{Method, PathBuilderError};
use thiserror::Error;

/// Boxed source error for transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by resource operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the backend, or no response came back
    #[error("network failure on {method} {path}: {source}")]
    NetworkFailure {
        method: Method,
        path: String,
        #[source]
        source: BoxError,
    },

    /// The backend answered with a non-success status
    #[error("HTTP {status} on {method} {path}: {body}")]
    HttpError {
        method: Method,
        path: String,
        status: u16,
        body: String,
    },

    /// A body could not be encoded, or the response could not be parsed into
    /// the expected shape
    #[error("serialization error on {path}: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The operation and identifier do not form a valid path
    #[error(transparent)]
    InvalidPath(#[from] PathBuilderError),

    /// The transport could not be constructed from its configuration
    #[error("invalid client configuration: {message}")]
    Configuration { message: String },
}

impl ClientError {
    /// HTTP status of an `HttpError`, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Get the error kind for metrics labels
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::NetworkFailure { .. } => "network",
            ClientError::HttpError { .. } => "http",
            ClientError::Serialization { .. } => "serialization",
            ClientError::InvalidPath(_) => "path",
            ClientError::Configuration { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_status() {
        let err = ClientError::HttpError {
            method: Method::Get,
            path: "/salons/salons/9/".to_string(),
            status: 404,
            body: r#"{"detail":"Not found."}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.kind(), "http");
        assert_eq!(
            err.to_string(),
            r#"HTTP 404 on GET /salons/salons/9/: {"detail":"Not found."}"#
        );
    }

    #[test]
    fn test_network_failure_has_no_status() {
        let err = ClientError::NetworkFailure {
            method: Method::Post,
            path: "/salons/timeslots/generate_slots/".to_string(),
            source: "connection refused".into(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert_eq!(err.kind(), "network");
    }
}
