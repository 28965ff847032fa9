//! In-process mock of the salon booking backend
//!
//! An Axum server bound to an ephemeral port. Routes are generated from
//! [`Operation::ALL`], so a request reaching any path the backend does not
//! expose gets Axum's plain 404. Every request that does match is captured.
//!
//! Responses:
//! - an `{id}` of `404` answers `404 {"detail": "Not found."}`
//! - `DELETE` answers `204 No Content`
//! - anything else echoes `{"method", "path", "body"}` with `200`

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::any,
    Router,
};
use paths::Operation;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Path prefix the backend is mounted under, like a deployed `/api`
pub const API_PREFIX: &str = "/api";

/// One request as seen by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: String,
    /// Raw (still percent-encoded) path, without the API prefix
    pub path: String,
    pub query: Option<String>,
    /// `None` if the request carried no body bytes
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
struct BackendState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Handle to a running mock backend
#[derive(Debug)]
pub struct MockBackend {
    addr: SocketAddr,
    state: BackendState,
}

impl MockBackend {
    /// Start the backend on `127.0.0.1` with an ephemeral port
    pub async fn start() -> Self {
        let state = BackendState::default();

        let templates: BTreeSet<String> = Operation::ALL
            .iter()
            .map(|operation| operation.route_template())
            .collect();
        let mut router = Router::new();
        for template in templates {
            router = router.route(&format!("{API_PREFIX}{template}"), any(capture));
        }
        let app = router.with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self { addr, state }
    }

    /// Base URL to configure the client with
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().expect("captured lock").clone()
    }

    pub fn last(&self) -> CapturedRequest {
        self.captured()
            .pop()
            .expect("backend received at least one request")
    }
}

async fn capture(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        }))
    };
    let captured = CapturedRequest {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body: body.clone(),
    };
    state.captured.lock().expect("captured lock").push(captured);

    if path.split('/').any(|segment| segment == "404") {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    }
    if method == Method::DELETE {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(json!({
        "method": method.as_str(),
        "path": path,
        "body": body,
    }))
    .into_response()
}

/// An address nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}{API_PREFIX}")
}
