//! # Logging
//!
//! Tracing subscriber setup shared by binaries embedding the client.

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber
///
/// Honors `RUST_LOG`; falls back to [`DEFAULT_LOG_FILTER`]. Calling this a
/// second time is a no-op apart from a warning.
pub fn init_tracing() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::warn!("Tracing subscriber already initialized: {}", e);
    }
}
