//! # Time Slot Service
//!
//! Slot listing, batch generation and blocking, spread over the
//! `/salons/timeslots/` and `/salons/blocked-times/` collections.
//!
//! The blocked/available state machine lives on the server. These methods
//! only trigger its transitions; whether generating or blocking overlapping
//! ranges twice is idempotent is up to the backend.

use std::sync::Arc;

use paths::{Action, Resource};
use serde::Serialize;
use serde_json::Value;

use super::types::BlockSlotRequest;
use crate::error::ClientError;
use crate::resource::{ResourceClient, ResourceId};
use crate::transport::{QueryParams, Transport};

#[derive(Debug, Clone)]
pub struct TimeSlotService {
    time_slots: ResourceClient,
    blocked_times: ResourceClient,
}

impl TimeSlotService {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            time_slots: ResourceClient::new(Arc::clone(&transport), Resource::TimeSlots),
            blocked_times: ResourceClient::new(transport, Resource::BlockedTimes),
        }
    }

    /// List time slots, filters passed as query parameters
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn get_time_slots(&self, params: &QueryParams) -> Result<Value, ClientError> {
        self.time_slots.list(params).await
    }

    /// Trigger server-side batch creation of slots
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn generate_time_slots<B>(&self, data: &B) -> Result<Value, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.time_slots
            .action(Action::GenerateSlots, None, data)
            .await
    }

    /// Block one slot; the body is exactly `{"reason": reason}`
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn block_time_slot(
        &self,
        id: impl Into<ResourceId>,
        reason: &str,
    ) -> Result<Value, ClientError> {
        self.time_slots
            .action(
                Action::BlockSlot,
                Some(&id.into()),
                &BlockSlotRequest::new(reason),
            )
            .await
    }

    /// Unblock one slot; sends no body
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn unblock_time_slot(&self, id: impl Into<ResourceId>) -> Result<Value, ClientError> {
        self.time_slots
            .action_without_body(Action::UnblockSlot, Some(&id.into()))
            .await
    }

    /// Block every slot inside a date/time interval
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn block_time_range<B>(&self, data: &B) -> Result<Value, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.blocked_times
            .action(Action::BlockTimeRange, None, data)
            .await
    }

    /// Remove the blocking overlay from a date/time interval
    ///
    /// # Errors
    ///
    /// Propagates any failure unchanged.
    pub async fn unblock_time_range<B>(&self, data: &B) -> Result<Value, ClientError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.blocked_times
            .action(Action::UnblockTimeRange, None, data)
            .await
    }
}
