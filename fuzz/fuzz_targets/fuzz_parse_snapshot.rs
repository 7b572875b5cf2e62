#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the snapshot parser and the diff engine behind it.
///
/// Any document that parses is diffed against itself, which must always
/// yield an empty report.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(snapshot) = operator_diff::parsers::parse_snapshot_str(s) {
            let report = operator_diff::compute_differences(&snapshot, &snapshot);
            assert!(report.is_empty());
        }
    }
});
