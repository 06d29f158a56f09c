use crate::io::read_log_file;
use aitrail_types::{RecordKind, TrajectoryCollection};
use std::path::Path;

/// Read the four well-known log files of a session directory into one
/// collection.
///
/// Each file is read independently; a missing directory or any subset of
/// missing files yields empty parts for the missing pieces only. Records
/// are keyed by their structural kind, so a record of the "wrong" shape
/// inside a given file still lands in the sequence matching its content.
pub fn read_session_dir(dir: &Path) -> TrajectoryCollection {
    let mut collection = TrajectoryCollection::new();

    for kind in RecordKind::ALL {
        for record in read_log_file(&dir.join(kind.log_file_name())) {
            collection.push(record);
        }
    }

    collection
}
