//! # PathBuilder
//!
//! Builds concrete request paths for an [`Operation`].
//!
//! ```
//! use paths::{Operation, PathBuilder, Resource};
//!
//! let path = PathBuilder::new(Operation::Get(Resource::Salons))
//!     .id("42")
//!     .build()
//!     .unwrap();
//! assert_eq!(path.to_string(), "/salons/salons/42/");
//! ```

use std::fmt;

use crate::errors::PathBuilderError;
use crate::operations::Operation;

/// A resolved request path as a list of raw (unescaped) segments
///
/// Every backend path ends with a slash. `Display` joins the raw segments
/// verbatim; escaping is left to whoever places the path into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    operation: Operation,
    segments: Vec<String>,
}

impl ApiPath {
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Raw path segments, e.g. `["salons", "timeslots", "7", "block_slot"]`
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        f.write_str("/")
    }
}

/// Builder for [`ApiPath`]
#[derive(Debug, Clone)]
pub struct PathBuilder {
    operation: Operation,
    id: Option<String>,
}

impl PathBuilder {
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            id: None,
        }
    }

    /// Set the resource identifier substituted for `{id}`
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Build the path
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is missing or unexpected for the
    /// operation, or if it is empty, `.` or `..`.
    pub fn build(self) -> Result<ApiPath, PathBuilderError> {
        let operation = self.operation;
        let mut segments: Vec<String> = operation
            .resource()
            .base_segments()
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        match (operation.requires_id(), self.id) {
            (true, None) => return Err(PathBuilderError::MissingId(operation)),
            (true, Some(id)) if id.is_empty() => return Err(PathBuilderError::EmptyId(operation)),
            (true, Some(id)) if is_dot_segment(&id) => {
                return Err(PathBuilderError::DotSegmentId(operation));
            }
            (true, Some(id)) => segments.push(id),
            (false, Some(_)) => return Err(PathBuilderError::UnexpectedId(operation)),
            (false, None) => {}
        }

        if let Operation::Action(action) = operation {
            segments.push(action.segment().to_string());
        }

        Ok(ApiPath {
            operation,
            segments,
        })
    }
}

/// `.` or `..`, literal or percent-encoded, which URL resolution collapses
fn is_dot_segment(id: &str) -> bool {
    matches!(
        id.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
