//! # Client Metrics
//!
//! Metrics for resource client requests: volume, failures by kind, latency.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{Histogram, IntCounterVec};
use std::sync::LazyLock;

static REQUESTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "salon_api_requests_total",
            "Total number of requests issued to the booking backend",
        ),
        &["operation"],
    )
    .expect("Failed to create REQUESTS_TOTAL metric - this should never happen")
});

static REQUEST_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "salon_api_request_errors_total",
            "Total number of failed requests by error kind",
        ),
        &["operation", "kind"],
    )
    .expect("Failed to create REQUEST_ERRORS_TOTAL metric - this should never happen")
});

static REQUEST_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "salon_api_request_duration_seconds",
            "Duration of backend requests in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
    )
    .expect("Failed to create REQUEST_DURATION metric - this should never happen")
});

/// Register client metrics with the registry
pub(crate) fn register_client_metrics() -> Result<()> {
    REGISTRY.register(Box::new(REQUESTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(REQUEST_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(REQUEST_DURATION.clone()))?;
    Ok(())
}

pub fn increment_requests(operation: &str) {
    REQUESTS_TOTAL.with_label_values(&[operation]).inc();
}

pub fn increment_request_errors(operation: &str, kind: &str) {
    REQUEST_ERRORS_TOTAL
        .with_label_values(&[operation, kind])
        .inc();
}

pub fn observe_request_duration(duration: f64) {
    REQUEST_DURATION.observe(duration);
}
