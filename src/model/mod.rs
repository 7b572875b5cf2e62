//! Data model for operator directory snapshots.
//!
//! [`RawSnapshot`] is the parsed input document. The diff engine flattens it
//! into an [`ExtractedDirectory`] keyed by an explicit [`OperatorKey`]
//! (operator id plus country code) before comparing two snapshots.

mod directory;
mod snapshot;

pub use directory::{ExtractedDirectory, OperatorEntry, OperatorKey};
pub use snapshot::{CountryRecord, OperatorRecord, RawSnapshot};
