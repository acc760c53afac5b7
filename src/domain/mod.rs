//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — query/filter types callers build
//! - `wire.rs` — raw serde structs matching backend responses
//! - `client.rs` — sub-client with HTTP methods
//!
//! These slices are a deliberately small surface: one per endpoint family,
//! enough to drive the request core from realistic call sites. Callers with
//! other endpoints build a [`RequestSpec`](crate::http::request::RequestSpec)
//! and use the executor directly.

pub mod jobs;
pub mod media_io;
pub mod monitor;
