//! # Recording Transport
//!
//! An in-memory [`Transport`] that records every request and answers from a
//! queue of scripted responses. It classifies scripted statuses the same way
//! [`ReqwestTransport`](super::ReqwestTransport) does, so resource clients
//! can be exercised without a backend.
//!
//! ```
//! use salon_booking_client::transport::mock::{MockResponse, RecordingTransport};
//! use salon_booking_client::SalonApi;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # tokio_test_block_on(async {
//! let transport = RecordingTransport::new();
//! transport.push_response(MockResponse::json(&json!({"id": 1, "name": "Rose"})));
//!
//! let api = SalonApi::with_transport(Arc::new(transport.clone()));
//! let salon = api.salons().get_salon(1).await.unwrap();
//!
//! assert_eq!(salon["name"], "Rose");
//! assert_eq!(transport.last_request().unwrap().path, "/salons/salons/1/");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use paths::{Method, Operation};
use serde_json::Value;

use super::{ApiRequest, ApiResponse, QueryParams, Transport};
use crate::error::ClientError;

/// A request as observed by the recording transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub operation: Operation,
    pub method: Method,
    /// Raw path, identifier substituted verbatim
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

/// A scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Respond with a status and raw body; non-2xx becomes `HttpError`
    Status { status: u16, body: String },
    /// Fail as if the backend were unreachable
    NetworkFailure(String),
}

impl MockResponse {
    /// `200 OK` with a JSON body
    #[must_use]
    pub fn json(value: &Value) -> Self {
        MockResponse::Status {
            status: 200,
            body: value.to_string(),
        }
    }

    /// `204 No Content`
    #[must_use]
    pub fn no_content() -> Self {
        MockResponse::Status {
            status: 204,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        MockResponse::Status {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn network_failure(message: impl Into<String>) -> Self {
        MockResponse::NetworkFailure(message.into())
    }
}

#[derive(Debug, Default)]
struct State {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<MockResponse>,
}

/// Transport that records requests and replays scripted responses
///
/// Clones share the same recording. When the script runs out, requests are
/// answered with `204 No Content`.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<State>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a response for the next unanswered request
    pub fn push_response(&self, response: MockResponse) {
        self.state().responses.push_back(response);
    }

    /// All requests received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state().requests.last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = request.method();
        let path = request.path.to_string();
        let scripted = {
            let mut state = self.state();
            state.requests.push(RecordedRequest {
                operation: request.path.operation(),
                method,
                path: path.clone(),
                query: request.query,
                body: request.body,
            });
            state.responses.pop_front()
        };
        let response = scripted.unwrap_or_else(MockResponse::no_content);

        match response {
            MockResponse::Status { status, body } if (200..300).contains(&status) => {
                Ok(ApiResponse { status, body })
            }
            MockResponse::Status { status, body } => Err(ClientError::HttpError {
                method,
                path,
                status,
                body,
            }),
            MockResponse::NetworkFailure(message) => Err(ClientError::NetworkFailure {
                method,
                path,
                source: message.into(),
            }),
        }
    }
}
