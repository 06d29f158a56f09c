use crate::record::{
    EditRecord, RecordKind, ResponseRecord, ShellRecord, ToolCallRecord, TrajectoryRecord,
};
use serde::{Deserialize, Serialize};

/// All records of one session directory, keyed by kind.
///
/// Order within each kind is file line order. Built fresh on every
/// aggregation call and never mutated in place afterwards; all four kinds
/// are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryCollection {
    pub tool_calls: Vec<ToolCallRecord>,
    pub shell: Vec<ShellRecord>,
    pub edits: Vec<EditRecord>,
    pub responses: Vec<ResponseRecord>,
}

impl TrajectoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record count across all kinds.
    pub fn len(&self) -> usize {
        self.tool_calls.len() + self.shell.len() + self.edits.len() + self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count_of(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Mcp => self.tool_calls.len(),
            RecordKind::Shell => self.shell.len(),
            RecordKind::Edit => self.edits.len(),
            RecordKind::Response => self.responses.len(),
        }
    }

    /// Append a record to the sequence matching its kind.
    pub fn push(&mut self, record: TrajectoryRecord) {
        match record {
            TrajectoryRecord::ToolCall(r) => self.tool_calls.push(r),
            TrajectoryRecord::Shell(r) => self.shell.push(r),
            TrajectoryRecord::Edit(r) => self.edits.push(r),
            TrajectoryRecord::Response(r) => self.responses.push(r),
        }
    }
}

impl FromIterator<TrajectoryRecord> for TrajectoryCollection {
    fn from_iter<I: IntoIterator<Item = TrajectoryRecord>>(iter: I) -> Self {
        let mut collection = TrajectoryCollection::new();
        for record in iter {
            collection.push(record);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordHeader;

    fn header() -> RecordHeader {
        RecordHeader {
            conversation_id: "conv-1".to_string(),
            generation_id: "gen-1".to_string(),
            hook_event_name: "test".to_string(),
            model: None,
            cursor_version: None,
            workspace_roots: None,
            user_email: None,
        }
    }

    #[test]
    fn push_routes_by_kind() {
        let mut collection = TrajectoryCollection::new();
        collection.push(TrajectoryRecord::Response(ResponseRecord {
            header: header(),
            text: "hi".to_string(),
        }));
        collection.push(TrajectoryRecord::Shell(ShellRecord {
            header: header(),
            command: "ls".to_string(),
            output: String::new(),
            duration: 1.0,
            sandbox: None,
        }));

        assert_eq!(collection.count_of(RecordKind::Response), 1);
        assert_eq!(collection.count_of(RecordKind::Shell), 1);
        assert_eq!(collection.count_of(RecordKind::Mcp), 0);
        assert_eq!(collection.len(), 2);
    }
}
