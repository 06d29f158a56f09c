use serde::{Deserialize, Serialize};

/// Sentinel value for branch/hash when resolution fails or the directory is
/// not a repository.
pub const UNKNOWN: &str = "unknown";

/// Repository state at summary time.
///
/// `session_commits` is populated by the caller from commit detection over
/// the session's shell records; the resolver itself never sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitContext {
    pub is_repo: bool,
    pub branch: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_commits: Option<Vec<String>>,
}

impl GitContext {
    /// The fallback context used for non-repositories and every failure
    /// mode of the resolver.
    pub fn unknown() -> Self {
        GitContext {
            is_repo: false,
            branch: UNKNOWN.to_string(),
            hash: UNKNOWN.to_string(),
            session_commits: None,
        }
    }
}

/// Optional context merged verbatim into a summary.
///
/// Absent fields stay absent in the summary output; callers can tell "no
/// context given" apart from "empty context".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook_used: Option<Vec<String>>,
}
