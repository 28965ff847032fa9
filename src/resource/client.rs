//! # Generic Resource Client
//!
//! CRUD and sub-action operations over one [`Resource`].

use std::sync::Arc;
use std::time::Instant;

use paths::{Action, Operation, PathBuilder, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, field, info_span, warn, Instrument};

use super::ResourceId;
use crate::error::ClientError;
use crate::observability::metrics;
use crate::transport::{ApiRequest, ApiResponse, QueryParams, Transport};

/// Client for one REST collection
///
/// Cheap to clone; clones share the transport and its connection pool.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    transport: Arc<dyn Transport>,
    resource: Resource,
}

impl ResourceClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, resource: Resource) -> Self {
        Self {
            transport,
            resource,
        }
    }

    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// `GET collection/` with `filters` as query parameters
    ///
    /// # Errors
    ///
    /// Propagates any transport, HTTP or decoding failure unchanged.
    pub async fn list<T: DeserializeOwned>(&self, filters: &QueryParams) -> Result<T, ClientError> {
        self.execute(Operation::List(self.resource), None, filters.clone(), None)
            .await
    }

    /// `GET collection/{id}/`
    ///
    /// # Errors
    ///
    /// A missing resource surfaces as `HttpError` with status 404.
    pub async fn get<T: DeserializeOwned>(&self, id: &ResourceId) -> Result<T, ClientError> {
        self.execute(Operation::Get(self.resource), Some(id), QueryParams::new(), None)
            .await
    }

    /// `POST collection/` with `body`; returns the created representation
    ///
    /// # Errors
    ///
    /// Propagates any encoding, transport, HTTP or decoding failure unchanged.
    pub async fn create<T, B>(&self, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let operation = Operation::Create(self.resource);
        let body = encode_body(operation, body)?;
        self.execute(operation, None, QueryParams::new(), Some(body))
            .await
    }

    /// `PUT collection/{id}/` with a full replacement representation
    ///
    /// # Errors
    ///
    /// Propagates any encoding, transport, HTTP or decoding failure unchanged.
    pub async fn update<T, B>(&self, id: &ResourceId, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let operation = Operation::Update(self.resource);
        let body = encode_body(operation, body)?;
        self.execute(operation, Some(id), QueryParams::new(), Some(body))
            .await
    }

    /// `DELETE collection/{id}/`; the response body is ignored
    ///
    /// # Errors
    ///
    /// Propagates any transport or HTTP failure unchanged.
    pub async fn delete(&self, id: &ResourceId) -> Result<(), ClientError> {
        let path = PathBuilder::new(Operation::Delete(self.resource))
            .id(id.as_str())
            .build()?;
        self.send(ApiRequest::new(path)).await?;
        Ok(())
    }

    /// `POST` to a sub-action of this resource with a JSON body
    ///
    /// `id` is required for item-scoped actions and rejected for
    /// collection-scoped ones.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the action belongs to another resource,
    /// otherwise propagates any failure unchanged.
    pub async fn action<T, B>(
        &self,
        action: Action,
        id: Option<&ResourceId>,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let operation = self.action_operation(action)?;
        let body = encode_body(operation, body)?;
        self.execute(operation, id, QueryParams::new(), Some(body))
            .await
    }

    /// `POST` to a sub-action of this resource without any request body
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the action belongs to another resource,
    /// otherwise propagates any failure unchanged.
    pub async fn action_without_body<T: DeserializeOwned>(
        &self,
        action: Action,
        id: Option<&ResourceId>,
    ) -> Result<T, ClientError> {
        let operation = self.action_operation(action)?;
        self.execute(operation, id, QueryParams::new(), None).await
    }

    fn action_operation(&self, action: Action) -> Result<Operation, ClientError> {
        if action.resource() == self.resource {
            Ok(Operation::Action(action))
        } else {
            Err(ClientError::Configuration {
                message: format!(
                    "action {} belongs to {}, not {}",
                    action.segment(),
                    action.resource(),
                    self.resource
                ),
            })
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        id: Option<&ResourceId>,
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let mut builder = PathBuilder::new(operation);
        if let Some(id) = id {
            builder = builder.id(id.as_str());
        }
        let mut request = ApiRequest::new(builder.build()?).with_query(query);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        let path = request.path.to_string();
        let response = self.send(request).await?;
        decode(&path, &response)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let operation = request.path.operation().name();
        let span = info_span!(
            "salon_api.request",
            operation = %operation,
            http.method = %request.method(),
            http.path = %request.path,
            request.duration_ms = field::Empty,
            request.success = field::Empty,
            error.kind = field::Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            metrics::increment_requests(&operation);
            let result = self.transport.execute(request).await;

            let elapsed = start.elapsed();
            metrics::observe_request_duration(elapsed.as_secs_f64());
            span_clone.record(
                "request.duration_ms",
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            );

            match &result {
                Ok(response) => {
                    span_clone.record("request.success", true);
                    debug!("{} completed with status {}", operation, response.status);
                }
                Err(e) => {
                    span_clone.record("request.success", false);
                    span_clone.record("error.kind", e.kind());
                    metrics::increment_request_errors(&operation, e.kind());
                    warn!("{} failed: {}", operation, e);
                }
            }
            result
        }
        .instrument(span)
        .await
    }
}

fn encode_body<B: Serialize + ?Sized>(operation: Operation, body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|source| ClientError::Serialization {
        path: operation.route_template(),
        source,
    })
}

/// Parse a response body; an empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(path: &str, response: &ApiResponse) -> Result<T, ClientError> {
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|source| ClientError::Serialization {
        path: path.to_string(),
        source,
    })
}
