//! # Metrics Module
//!
//! Prometheus metrics, organized by responsibility.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and text exposition
//! - `client_metrics` - Resource client request metrics
//! - `router_metrics` - Route table view loading metrics

pub mod client_metrics;
pub mod registry;
pub mod router_metrics;

pub use client_metrics::*;
pub use registry::*;
pub use router_metrics::*;
