//! # Reqwest Transport
//!
//! Production transport: reqwest with rustls, one pooled client per transport.

use async_trait::async_trait;
use paths::{ApiPath, Method};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tracing::{debug, info};

use super::{ApiRequest, ApiResponse, QueryParams, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Create a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the base URL is not an absolute URL that can
    /// carry a path, or if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientError::Configuration {
            message: format!("base URL {} is invalid: {e}", config.base_url),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration {
                message: format!("base URL {} cannot carry a path", config.base_url),
            });
        }

        // Create HTTP client with rustls
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Configuration {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        info!("Salon booking API endpoint: {}", base_url);

        Ok(Self {
            http_client,
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    ///
    /// Segments are appended after any path prefix of the base URL and
    /// percent-escaped individually; the trailing slash is preserved.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the base URL cannot carry a path.
    pub fn url_for(&self, path: &ApiPath, query: &QueryParams) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|()| ClientError::Configuration {
                        message: format!("base URL {} cannot carry a path", self.base_url),
                    })?;
            segments.pop_if_empty();
            segments.extend(path.segments());
            segments.push("");
        }
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = request.method();
        let path = request.path.to_string();
        let url = self.url_for(&request.path, &request.query)?;

        debug!("{} {}", method, url);

        let mut builder = self
            .http_client
            .request(to_reqwest_method(method), url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::NetworkFailure {
                method,
                path: path.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkFailure {
                method,
                path: path.clone(),
                source: Box::new(e),
            })?;

        if !status.is_success() {
            return Err(ClientError::HttpError {
                method,
                path,
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paths::{Action, Operation, PathBuilder, PathBuilderError, Resource};

    fn transport(base_url: &str) -> ReqwestTransport {
        ReqwestTransport::new(&ClientConfig::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_url_for_appends_after_base_path_prefix() {
        let transport = transport("http://localhost:8000/api");
        let path = PathBuilder::new(Operation::List(Resource::Salons))
            .build()
            .unwrap();
        let url = transport.url_for(&path, &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/salons/salons/");
    }

    #[test]
    fn test_url_for_tolerates_trailing_slash_in_base() {
        let transport = transport("http://localhost:8000/api/");
        let path = PathBuilder::new(Operation::Action(Action::BlockTimeRange))
            .build()
            .unwrap();
        let url = transport.url_for(&path, &QueryParams::new()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/salons/blocked-times/block_time_range/"
        );
    }

    #[test]
    fn test_url_for_without_filters_has_no_query_string() {
        let transport = transport("http://localhost:8000");
        let path = PathBuilder::new(Operation::List(Resource::TimeSlots))
            .build()
            .unwrap();
        let url = transport.url_for(&path, &QueryParams::new()).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.path(), "/salons/timeslots/");
    }

    #[test]
    fn test_url_for_encodes_filters_key_for_key() {
        let transport = transport("http://localhost:8000");
        let path = PathBuilder::new(Operation::List(Resource::Salons))
            .build()
            .unwrap();
        let query = QueryParams::new().with("status", "active");
        let url = transport.url_for(&path, &query).unwrap();
        assert_eq!(url.query(), Some("status=active"));
    }

    #[test]
    fn test_url_for_escapes_identifier_segment() {
        let transport = transport("http://localhost:8000");
        let path = PathBuilder::new(Operation::Get(Resource::Salons))
            .id("north branch/2")
            .build()
            .unwrap();
        let url = transport.url_for(&path, &QueryParams::new()).unwrap();
        assert_eq!(url.path(), "/salons/salons/north%20branch%2F2/");
    }

    #[test]
    fn test_dot_identifiers_never_resolve_to_parent_path() {
        let transport = transport("http://localhost:8000/api");
        for id in [".", ".."] {
            let err = PathBuilder::new(Operation::Get(Resource::Salons))
                .id(id)
                .build()
                .unwrap_err();
            assert!(matches!(err, PathBuilderError::DotSegmentId(_)), "id {id:?}");
        }

        let path = PathBuilder::new(Operation::Get(Resource::Salons))
            .id("...")
            .build()
            .unwrap();
        let url = transport.url_for(&path, &QueryParams::new()).unwrap();
        assert_eq!(url.path(), "/api/salons/salons/.../");
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = ReqwestTransport::new(&ClientConfig::with_base_url("/api")).unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_rejects_non_hierarchical_base_url() {
        let err =
            ReqwestTransport::new(&ClientConfig::with_base_url("mailto:desk@salon.example"))
                .unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
