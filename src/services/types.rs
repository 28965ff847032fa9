//! # Request Types
//!
//! Typed request bodies for time-slot sub-actions.
//!
//! These are conveniences: every service method accepts any `Serialize`
//! body and forwards it verbatim, so callers can also pass `serde_json::json!`
//! values carrying fields not modelled here.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Body of `POST /salons/timeslots/{id}/block_slot/`
///
/// Serializes to exactly `{"reason": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSlotRequest {
    pub reason: String,
}

impl BlockSlotRequest {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Body of `POST /salons/timeslots/generate_slots/`
///
/// Asks the backend to create slots for every `interval_minutes` step
/// between `start_date` and `end_date` (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSlotsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salon: Option<u64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interval_minutes: u32,
}

/// Body of the blocked-times range actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salon: Option<u64>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
