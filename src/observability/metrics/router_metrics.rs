//! # Router Metrics
//!
//! Metrics for on-demand view loading.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::IntCounterVec;
use std::sync::LazyLock;

static VIEWS_LOADED_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "salon_views_loaded_total",
            "Total number of view modules loaded (first activation only)",
        ),
        &["route"],
    )
    .expect("Failed to create VIEWS_LOADED_TOTAL metric - this should never happen")
});

/// Register router metrics with the registry
pub(crate) fn register_router_metrics() -> Result<()> {
    REGISTRY.register(Box::new(VIEWS_LOADED_TOTAL.clone()))?;
    Ok(())
}

pub fn increment_views_loaded(route: &str) {
    VIEWS_LOADED_TOTAL.with_label_values(&[route]).inc();
}

#[must_use]
pub fn views_loaded(route: &str) -> u64 {
    VIEWS_LOADED_TOTAL.with_label_values(&[route]).get()
}
