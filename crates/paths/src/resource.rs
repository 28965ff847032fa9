//! # Resources
//!
//! REST collections exposed by the salon booking backend.

use std::fmt;

/// A REST collection identified by its base path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/salons/salons/`
    Salons,
    /// `/salons/timeslots/`
    TimeSlots,
    /// `/salons/blocked-times/`
    BlockedTimes,
}

impl Resource {
    /// Path segments of the collection, without leading or trailing slashes
    #[must_use]
    pub fn base_segments(self) -> &'static [&'static str] {
        match self {
            Resource::Salons => &["salons", "salons"],
            Resource::TimeSlots => &["salons", "timeslots"],
            Resource::BlockedTimes => &["salons", "blocked-times"],
        }
    }

    /// Collection path with leading and trailing slash, e.g. `/salons/timeslots/`
    #[must_use]
    pub fn base_path(self) -> String {
        format!("/{}/", self.base_segments().join("/"))
    }

    /// Short name used for span fields and metric labels
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Salons => "salons",
            Resource::TimeSlots => "timeslots",
            Resource::BlockedTimes => "blocked_times",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
