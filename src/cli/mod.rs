//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod diff;
#[cfg(feature = "fetch")]
mod fetch;

pub use diff::run_diff;
#[cfg(feature = "fetch")]
pub use fetch::run_fetch;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, FetchConfig};
