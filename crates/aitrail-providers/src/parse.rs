use aitrail_types::{
    EditRecord, RecordKind, ResponseRecord, ShellRecord, ToolCallRecord, TrajectoryRecord,
};
use serde_json::Value;

/// Decode one raw log line into a typed record.
///
/// Returns `None` for anything that is not a valid record: blank or
/// whitespace-only lines, malformed JSON (including truncated trailing
/// lines from a writer still flushing), lines missing the required common
/// fields, and lines whose required fields are present but whose shape
/// matches no variant. Dropping is always preferred over mis-tagging.
///
/// The logs carry no explicit type tag, so classification is structural:
/// an ordered series of capability checks over the discriminating fields,
/// ToolCall -> Shell -> Edit -> Response.
pub fn parse_line(line: &str) -> Option<TrajectoryRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let value: Value = serde_json::from_str(line).ok()?;
    let kind = classify(&value)?;

    match kind {
        RecordKind::Mcp => serde_json::from_value::<ToolCallRecord>(value)
            .ok()
            .map(TrajectoryRecord::ToolCall),
        RecordKind::Shell => serde_json::from_value::<ShellRecord>(value)
            .ok()
            .map(TrajectoryRecord::Shell),
        RecordKind::Edit => serde_json::from_value::<EditRecord>(value)
            .ok()
            .map(TrajectoryRecord::Edit),
        RecordKind::Response => serde_json::from_value::<ResponseRecord>(value)
            .ok()
            .map(TrajectoryRecord::Response),
    }
}

/// Determine the record kind from field presence, or `None` when the value
/// is not an object, lacks the required common fields, or matches no
/// variant's discriminating field set.
fn classify(value: &Value) -> Option<RecordKind> {
    let obj = value.as_object()?;

    let has_required_header = ["conversation_id", "generation_id", "hook_event_name"]
        .iter()
        .all(|key| obj.get(*key).is_some_and(Value::is_string));
    if !has_required_header {
        return None;
    }

    if obj.contains_key("tool_name") && obj.contains_key("tool_input") {
        return Some(RecordKind::Mcp);
    }
    if obj.contains_key("command") && obj.contains_key("output") && obj.contains_key("duration") {
        return Some(RecordKind::Shell);
    }
    if obj.contains_key("file_path") && obj.contains_key("edits") {
        return Some(RecordKind::Edit);
    }
    if obj.contains_key("text") {
        return Some(RecordKind::Response);
    }

    None
}
