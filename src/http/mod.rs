//! HTTP client layer — `MonetaryHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::MonetaryHttp;
pub use retry::{RetryConfig, RetryPolicy};
