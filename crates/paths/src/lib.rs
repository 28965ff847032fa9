//! Shared API path definitions for the salon booking backend
//!
//! This crate centralizes all API paths to ensure consistency
//! between the client and the mock backends used in tests.
//!
//! ## PathBuilder
//!
//! The `PathBuilder` provides a type-safe, builder-pattern API for constructing
//! request paths from an [`Operation`] and an optional resource identifier.
//!
//! ## Route Templates
//!
//! [`Operation::route_template`] renders the same path with an `{id}`
//! placeholder, which is the syntax Axum routes expect. Tests validate the
//! templates against `PathBuilder` output.

pub mod builder;
pub mod errors;
pub mod operations;
pub mod resource;

// Re-export core types for convenience
pub use builder::{ApiPath, PathBuilder};
pub use errors::PathBuilderError;
pub use operations::{Action, ActionScope, Method, Operation};
pub use resource::Resource;
