//! # Services
//!
//! Domain-named wrappers over [`ResourceClient`](crate::resource::ResourceClient),
//! one method per backend operation.

mod salon;
mod time_slot;
pub mod types;

pub use salon::SalonService;
pub use time_slot::TimeSlotService;
pub use types::{BlockSlotRequest, GenerateSlotsRequest, TimeRange};
