//! # Router Error Types

use thiserror::Error;

/// Failure of a view factory
///
/// Failures are not cached: the next activation runs the factory again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to load view {view}: {message}")]
pub struct ViewLoadError {
    pub view: String,
    pub message: String,
}

impl ViewLoadError {
    pub fn new(view: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            message: message.into(),
        }
    }
}

/// Route table construction and navigation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route path {0}")]
    DuplicatePath(String),

    #[error("duplicate route name {0}")]
    DuplicateName(String),

    #[error("route path {0} must start with '/'")]
    InvalidPath(String),

    #[error("no route matches {0}")]
    NotFound(String),

    #[error(transparent)]
    ViewLoad(#[from] ViewLoadError),
}
