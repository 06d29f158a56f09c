use aitrail_types::{
    EditOp, EditRecord, RecordHeader, ResponseRecord, ShellRecord, ToolCallRecord,
    TrajectoryRecord,
};
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A header with the required common fields filled in.
pub fn record_header(conversation_id: &str, generation_id: &str) -> RecordHeader {
    RecordHeader {
        conversation_id: conversation_id.to_string(),
        generation_id: generation_id.to_string(),
        hook_event_name: "test-hook".to_string(),
        model: None,
        cursor_version: None,
        workspace_roots: None,
        user_email: None,
    }
}

pub fn tool_call(conversation_id: &str, tool_name: &str) -> ToolCallRecord {
    ToolCallRecord {
        header: record_header(conversation_id, "gen-1"),
        tool_name: tool_name.to_string(),
        tool_input: "{}".to_string(),
        result_json: None,
    }
}

pub fn shell(conversation_id: &str, command: &str, output: &str) -> ShellRecord {
    ShellRecord {
        header: record_header(conversation_id, "gen-1"),
        command: command.to_string(),
        output: output.to_string(),
        duration: 10.0,
        sandbox: None,
    }
}

pub fn edit(conversation_id: &str, file_path: &str, edits: &[(&str, &str)]) -> EditRecord {
    EditRecord {
        header: record_header(conversation_id, "gen-1"),
        file_path: file_path.to_string(),
        edits: edits
            .iter()
            .map(|(old, new)| EditOp {
                old_string: old.to_string(),
                new_string: new.to_string(),
            })
            .collect(),
    }
}

pub fn response(conversation_id: &str, text: &str) -> ResponseRecord {
    ResponseRecord {
        header: record_header(conversation_id, "gen-1"),
        text: text.to_string(),
    }
}

/// Writes JSONL trajectory logs into a session directory, one line per
/// record, appending in call order.
pub struct SessionDirBuilder {
    dir: PathBuf,
}

impl SessionDirBuilder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize a record and append it to the log file matching its kind.
    pub fn write_record(&self, record: &TrajectoryRecord) -> Result<&Self> {
        let line = serde_json::to_string(record)?;
        self.write_raw(record.kind().log_file_name(), &line)
    }

    /// Append a raw line verbatim to the named log file. Useful for
    /// injecting malformed or truncated lines.
    pub fn write_raw(&self, file_name: &str, line: &str) -> Result<&Self> {
        std::fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(file_name))?;
        writeln!(file, "{line}")?;
        Ok(self)
    }
}
