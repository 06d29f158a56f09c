use crate::parse::parse_line;
use aitrail_types::TrajectoryRecord;
use std::path::Path;

/// Read one JSONL trajectory log into an ordered record sequence.
///
/// A missing or unreadable file yields an empty sequence, not an error.
/// Unparseable lines are skipped; the relative order of valid lines is
/// preserved. There is no line-length limit.
pub fn read_log_file(path: &Path) -> Vec<TrajectoryRecord> {
    let Ok(text) = std::fs::read_to_string(path) else {
        return Vec::new();
    };

    text.lines().filter_map(parse_line).collect()
}
