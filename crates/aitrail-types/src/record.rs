use serde::{Deserialize, Serialize};

/// Fields shared by every trajectory record regardless of kind.
///
/// Log lines are written by hook scripts outside our control; everything
/// beyond the three required ids is optional and unknown extra fields are
/// ignored during decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordHeader {
    /// Groups all records of one session.
    pub conversation_id: String,

    /// Identifies one turn within the conversation.
    pub generation_id: String,

    /// Name of the hook event that produced this line.
    pub hook_event_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_roots: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// One MCP tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRecord {
    #[serde(flatten)]
    pub header: RecordHeader,

    pub tool_name: String,

    /// Opaque serialized payload; never interpreted by this crate.
    pub tool_input: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_json: Option<String>,
}

/// One shell command execution with its captured output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellRecord {
    #[serde(flatten)]
    pub header: RecordHeader,

    pub command: String,

    /// Captured stdout/stderr, unbounded length.
    pub output: String,

    /// Wall-clock duration in milliseconds, possibly fractional.
    pub duration: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,
}

/// A single old/new replacement within a file edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditOp {
    pub old_string: String,
    pub new_string: String,
}

/// One file-edit event covering one or more replacements in a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    #[serde(flatten)]
    pub header: RecordHeader,

    pub file_path: String,

    pub edits: Vec<EditOp>,
}

/// One assistant text response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(flatten)]
    pub header: RecordHeader,

    pub text: String,
}

/// The four record kinds a trajectory log can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Mcp,
    Shell,
    Edit,
    Response,
}

impl RecordKind {
    /// All kinds in their canonical order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Mcp,
        RecordKind::Shell,
        RecordKind::Edit,
        RecordKind::Response,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Mcp => "mcp",
            RecordKind::Shell => "shell",
            RecordKind::Edit => "edit",
            RecordKind::Response => "response",
        }
    }

    /// On-disk log file name convention for this kind within a session
    /// directory.
    pub fn log_file_name(&self) -> &'static str {
        match self {
            RecordKind::Mcp => "mcp_calls.jsonl",
            RecordKind::Shell => "shell_commands.jsonl",
            RecordKind::Edit => "file_edits.jsonl",
            RecordKind::Response => "agent_responses.jsonl",
        }
    }
}

/// A single trajectory record of any kind.
///
/// The source logs carry no explicit tag; the variant is determined
/// structurally by which discriminating fields are present (see the line
/// parser in `aitrail-providers`). Serialization is untagged so records
/// round-trip in the same shape the logs use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrajectoryRecord {
    ToolCall(ToolCallRecord),
    Shell(ShellRecord),
    Edit(EditRecord),
    Response(ResponseRecord),
}

impl TrajectoryRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            TrajectoryRecord::ToolCall(_) => RecordKind::Mcp,
            TrajectoryRecord::Shell(_) => RecordKind::Shell,
            TrajectoryRecord::Edit(_) => RecordKind::Edit,
            TrajectoryRecord::Response(_) => RecordKind::Response,
        }
    }

    pub fn header(&self) -> &RecordHeader {
        match self {
            TrajectoryRecord::ToolCall(r) => &r.header,
            TrajectoryRecord::Shell(r) => &r.header,
            TrajectoryRecord::Edit(r) => &r.header,
            TrajectoryRecord::Response(r) => &r.header,
        }
    }
}

impl From<ToolCallRecord> for TrajectoryRecord {
    fn from(record: ToolCallRecord) -> Self {
        TrajectoryRecord::ToolCall(record)
    }
}

impl From<ShellRecord> for TrajectoryRecord {
    fn from(record: ShellRecord) -> Self {
        TrajectoryRecord::Shell(record)
    }
}

impl From<EditRecord> for TrajectoryRecord {
    fn from(record: EditRecord) -> Self {
        TrajectoryRecord::Edit(record)
    }
}

impl From<ResponseRecord> for TrajectoryRecord {
    fn from(record: ResponseRecord) -> Self {
        TrajectoryRecord::Response(record)
    }
}

/// Anything that belongs to a conversation.
///
/// Implemented by every record type so the conversation filter can operate
/// over any homogeneous sequence.
pub trait SessionScoped {
    fn conversation_id(&self) -> &str;
}

impl SessionScoped for ToolCallRecord {
    fn conversation_id(&self) -> &str {
        &self.header.conversation_id
    }
}

impl SessionScoped for ShellRecord {
    fn conversation_id(&self) -> &str {
        &self.header.conversation_id
    }
}

impl SessionScoped for EditRecord {
    fn conversation_id(&self) -> &str {
        &self.header.conversation_id
    }
}

impl SessionScoped for ResponseRecord {
    fn conversation_id(&self) -> &str {
        &self.header.conversation_id
    }
}

impl SessionScoped for TrajectoryRecord {
    fn conversation_id(&self) -> &str {
        &self.header().conversation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_record_tolerates_unknown_fields() {
        let json = r#"{
            "conversation_id": "conv-1",
            "generation_id": "gen-1",
            "hook_event_name": "afterShellExecution",
            "command": "ls",
            "output": "src\n",
            "duration": 12.5,
            "some_future_field": {"nested": true}
        }"#;
        let record: ShellRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.command, "ls");
        assert_eq!(record.duration, 12.5);
        assert_eq!(record.sandbox, None);
    }

    #[test]
    fn header_flattens_into_variant() {
        let record = ResponseRecord {
            header: RecordHeader {
                conversation_id: "conv-1".to_string(),
                generation_id: "gen-1".to_string(),
                hook_event_name: "stop".to_string(),
                model: Some("model-x".to_string()),
                cursor_version: None,
                workspace_roots: None,
                user_email: None,
            },
            text: "done".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["conversation_id"], "conv-1");
        assert_eq!(json["text"], "done");
        assert!(json.get("cursor_version").is_none());
    }

    #[test]
    fn kind_log_file_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            RecordKind::ALL.iter().map(|k| k.log_file_name()).collect();
        assert_eq!(names.len(), 4);
    }
}
