use aitrail_types::{GitContext, ShellRecord};
use regex::Regex;
use std::sync::LazyLock;

// Matches the git commit confirmation banner at the start of an output
// line, e.g. `[main abc1234] Fix bug`. Kept deliberately loose: any
// bracketed `[word hexlike]` token at line start matches, which is the
// compatibility contract even though unrelated output could in principle
// collide with it.
static COMMIT_BANNER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[\S+ ([0-9a-f]+)\]").unwrap());

/// Scan shell records for commit invocations and extract the resulting
/// short hashes from their recorded output.
///
/// Hashes are emitted per commit attempt in first-occurrence order with no
/// deduplication; an attempt whose output carries no banner emits nothing.
/// Non-commit records are ignored entirely.
pub fn detect_commits(records: &[ShellRecord]) -> Vec<String> {
    let mut hashes = Vec::new();

    for record in records {
        if !is_commit_command(&record.command) {
            continue;
        }
        if let Some(caps) = COMMIT_BANNER_REGEX.captures(&record.output) {
            hashes.push(caps[1].to_string());
        }
    }

    hashes
}

/// Attach commits detected in the session's shell records to a resolved
/// git context. The field stays absent when nothing was detected.
pub fn with_session_commits(mut git: GitContext, records: &[ShellRecord]) -> GitContext {
    let commits = detect_commits(records);
    if !commits.is_empty() {
        git.session_commits = Some(commits);
    }
    git
}

/// A command is a commit attempt when it invokes `git commit`, including
/// the amend form.
fn is_commit_command(command: &str) -> bool {
    command.contains("git commit")
}
