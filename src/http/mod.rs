//! HTTP request core — executor, rate limiting, retry, error
//! classification, pagination and streaming transfer.

pub mod classify;
pub mod client;
pub mod paging;
pub mod rate_limit;
pub mod request;
pub mod retry;
pub mod transfer;

pub use client::CrescendoHttp;
pub use paging::{Page, Paginator};
pub use rate_limit::RateLimiter;
pub use request::{RequestBody, RequestSpec};
pub use retry::{RetryConfig, RetryPolicy};
