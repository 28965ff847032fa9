//! # Resource Client
//!
//! Generic binding between domain operations on one REST collection and the
//! transport. Each operation builds a path from the shared `paths` crate,
//! hands the request to the transport and returns the backend payload
//! unmodified. No retries, no caching, no interpretation of failures.

mod client;
mod id;

pub use client::ResourceClient;
pub use id::ResourceId;
