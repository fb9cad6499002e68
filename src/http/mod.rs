//! HTTP client module
//!
//! A reqwest wrapper shared by the source adapter and the CLI. One request
//! is one attempt: upstream failures surface as errors for the caller to
//! report, rather than being retried or collapsed into empty data.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};

#[cfg(test)]
mod tests;
