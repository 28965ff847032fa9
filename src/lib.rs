//! Salon Booking Client Library
//!
//! Typed client for the salon appointment booking backend, plus the route
//! table of the public site.
//!
//! - [`SalonApi`] bundles the salon and time-slot services over one transport.
//! - [`resource::ResourceClient`] is the generic CRUD + sub-action binding the
//!   services are built on.
//! - [`router`] maps site paths to lazily loaded views and decides where the
//!   viewport scrolls after navigation.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod resource;
pub mod router;
pub mod services;
pub mod transport;

// Re-export core types for convenience
pub use api::SalonApi;
pub use config::ClientConfig;
pub use error::ClientError;
pub use resource::ResourceId;
pub use transport::QueryParams;
