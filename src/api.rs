//! # Salon API
//!
//! Entry point bundling every service over a single transport.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::services::{SalonService, TimeSlotService};
use crate::transport::{ReqwestTransport, Transport};

/// Salon booking backend client
///
/// Cheap to clone; all services share one transport and connection pool.
#[derive(Debug, Clone)]
pub struct SalonApi {
    salons: SalonService,
    time_slots: TimeSlotService,
}

impl SalonApi {
    /// Create a client talking to the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the base URL is unusable.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new(config)?)))
    }

    /// Create a client over any transport (e.g. a recording mock)
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            salons: SalonService::new(Arc::clone(&transport)),
            time_slots: TimeSlotService::new(transport),
        }
    }

    #[must_use]
    pub fn salons(&self) -> &SalonService {
        &self.salons
    }

    #[must_use]
    pub fn time_slots(&self) -> &TimeSlotService {
        &self.time_slots
    }
}
