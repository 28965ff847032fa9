//! # Transport
//!
//! The seam between resource operations and HTTP.
//!
//! Resource clients build an [`ApiRequest`] and hand it to a [`Transport`].
//! The transport owns connection handling and status classification: it
//! returns `Ok` only for 2xx responses and maps everything else onto
//! [`ClientError`].
//!
//! - [`ReqwestTransport`] talks to the real backend over rustls.
//! - [`mock::RecordingTransport`] records requests and replays scripted
//!   responses, for tests and offline callers.

mod http;
pub mod mock;
mod query;

pub use http::ReqwestTransport;
pub use query::QueryParams;

use crate::error::ClientError;
use async_trait::async_trait;
use paths::{ApiPath, Method};
use serde_json::Value;

/// A fully resolved backend request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: ApiPath,
    pub query: QueryParams,
    /// JSON body; `None` sends no body at all
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(path: ApiPath) -> Self {
        Self {
            path,
            query: QueryParams::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.path.operation().method()
    }
}

/// A successful (2xx) backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// Raw response body; may be empty (e.g. `204 No Content`)
    pub body: String,
}

/// HTTP transport used by resource clients
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Execute a request
    ///
    /// # Errors
    ///
    /// - `NetworkFailure` if no response was received
    /// - `HttpError` for any non-2xx status
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}
