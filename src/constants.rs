//! # Constants
//!
//! Default values used when the corresponding environment variable is unset.

/// Backend base URL; request paths are appended to it
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Total request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection establishment timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("salon-booking-client/", env!("CARGO_PKG_VERSION"));

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "salon_booking_client=info,salonctl=info";
