//! # Salon Service
//!
//! CRUD over `/salons/salons/`.

use std::sync::Arc;

use paths::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::resource::{ResourceClient, ResourceId};
use crate::transport::{QueryParams, Transport};

/// Salon operations; payloads are returned exactly as the backend sent them
#[derive(Debug, Clone)]
pub struct SalonService {
    salons: ResourceClient,
}

impl SalonService {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            salons: ResourceClient::new(transport, Resource::Salons),
        }
    }

    /// List salons, filters passed as query parameters
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn get_salons(&self, params: &QueryParams) -> Result<Value, ClientError> {
        self.salons.list(params).await
    }

    /// # Errors
    ///
    /// A missing salon surfaces as `HttpError` with status 404.
    pub async fn get_salon(&self, id: impl Into<ResourceId>) -> Result<Value, ClientError> {
        self.salons.get(&id.into()).await
    }

    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn create_salon<B>(&self, data: &B) -> Result<Value, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.salons.create(data).await
    }

    /// Replace a salon with a complete representation
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn update_salon<B>(
        &self,
        id: impl Into<ResourceId>,
        data: &B,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.salons.update(&id.into(), data).await
    }

    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn delete_salon(&self, id: impl Into<ResourceId>) -> Result<(), ClientError> {
        self.salons.delete(&id.into()).await
    }
}
