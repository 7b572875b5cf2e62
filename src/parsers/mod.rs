//! Snapshot document parsers.
//!
//! ## Usage
//!
//! ```no_run
//! use operator_diff::parsers::parse_snapshot;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot(Path::new("test_resources/response.json")).unwrap();
//! println!("{} countries", snapshot.country_count());
//! ```

mod summary;

pub use summary::{parse_snapshot_str, parse_snapshot_value};

use crate::error::{ErrorContext, OperatorDiffError, Result};
use crate::model::RawSnapshot;
use std::path::Path;

/// Read and parse a snapshot file.
pub fn parse_snapshot(path: &Path) -> Result<RawSnapshot> {
    let content =
        std::fs::read_to_string(path).map_err(|e| OperatorDiffError::io(path, e))?;
    parse_snapshot_str(&content).with_context(|| path.display().to_string())
}
