//! Remote snapshot retrieval.
//!
//! The candidate snapshot can be pulled from the bulk-access summary
//! endpoint instead of being read from disk. Requires the `fetch` feature.

mod client;

pub use client::{SummaryClient, SummaryClientConfig};
