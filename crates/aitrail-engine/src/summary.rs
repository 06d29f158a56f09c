use aitrail_types::{GitContext, SummaryContext, TrajectoryCollection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Derived, immutable summary of one conversation's trajectory.
///
/// Field names are a compatibility contract with downstream consumers of
/// the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectorySummary {
    pub mcp_count: usize,
    pub shell_count: usize,
    pub edit_count: usize,
    pub response_count: usize,

    /// Tool name -> occurrence count, in first-occurrence order.
    pub tool_usage: Vec<ToolUsage>,

    /// Edited file paths, deduplicated keeping first occurrence.
    pub edited_files: Vec<String>,

    /// Shell commands, deduplicated keeping first occurrence.
    pub shell_commands: Vec<String>,

    /// Compact trail string, exact format
    /// `"MCP:<n> Shell:<n> Edits:<n> Responses:<n>"`.
    pub ai_trail: String,

    /// One human-readable line per record, chronological within each kind.
    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitContext>,

    #[serde(
        default,
        rename = "playbook_used",
        skip_serializing_if = "Option::is_none"
    )]
    pub playbook_used: Option<Vec<String>>,
}

/// One entry of the tool-usage frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUsage {
    pub name: String,
    pub count: usize,
}

/// Build a summary from an (already filtered) collection, optionally
/// merging git and playbook context verbatim.
///
/// When `context` is `None` the `git`/`playbook_used` fields are absent
/// from the summary, which is distinct from a supplied-but-empty context.
pub fn build_summary(
    collection: &TrajectoryCollection,
    context: Option<&SummaryContext>,
) -> TrajectorySummary {
    let mcp_count = collection.tool_calls.len();
    let shell_count = collection.shell.len();
    let edit_count = collection.edits.len();
    let response_count = collection.responses.len();

    let mut tool_usage: Vec<ToolUsage> = Vec::new();
    for record in &collection.tool_calls {
        match tool_usage.iter_mut().find(|u| u.name == record.tool_name) {
            Some(usage) => usage.count += 1,
            None => tool_usage.push(ToolUsage {
                name: record.tool_name.clone(),
                count: 1,
            }),
        }
    }

    let edited_files = dedup_first(collection.edits.iter().map(|e| e.file_path.as_str()));
    let shell_commands = dedup_first(collection.shell.iter().map(|s| s.command.as_str()));

    let ai_trail = format!(
        "MCP:{mcp_count} Shell:{shell_count} Edits:{edit_count} Responses:{response_count}"
    );

    let mut steps = Vec::with_capacity(collection.len());
    for record in &collection.tool_calls {
        steps.push(format!("MCP call: {}", record.tool_name));
    }
    for record in &collection.shell {
        steps.push(format!("Shell: {}", record.command));
    }
    for record in &collection.edits {
        steps.push(format!(
            "Edit: {} ({} change{})",
            record.file_path,
            record.edits.len(),
            if record.edits.len() == 1 { "" } else { "s" }
        ));
    }
    for record in &collection.responses {
        steps.push(format!("Response: {}", snippet(&record.text)));
    }

    let (git, playbook_used) = match context {
        Some(ctx) => (ctx.git.clone(), ctx.playbook_used.clone()),
        None => (None, None),
    };

    TrajectorySummary {
        mcp_count,
        shell_count,
        edit_count,
        response_count,
        tool_usage,
        edited_files,
        shell_commands,
        ai_trail,
        steps,
        git,
        playbook_used,
    }
}

/// Deduplicate keeping first occurrence, preserving input order.
fn dedup_first<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

/// First 80 characters of a response, on a char boundary.
fn snippet(text: &str) -> String {
    let mut out: String = text.chars().take(80).collect();
    if out.len() < text.len() {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_first_keeps_first_occurrence_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(dedup_first(values.into_iter()), ["b", "a", "c"]);
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let text = "é".repeat(200);
        let cut = snippet(&text);
        assert_eq!(cut.chars().count(), 81); // 80 chars + ellipsis
    }
}
