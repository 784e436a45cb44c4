//! Wearpick - wrap-around swatch color picker
//!
//! HTTP service and CLI around the `swatch-grid` crate: picker sessions,
//! screen rendering for round and square watch displays, and grid lookups.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
