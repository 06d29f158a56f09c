// Engine module - pure computation over parsed trajectory records.
// This layer sits between ingested collections (providers) and the callers
// that display or persist summaries.

pub mod commits;
pub mod filter;
pub mod summary;

pub use commits::{detect_commits, with_session_commits};
pub use filter::{filter_by_conversation, filter_collection};
pub use summary::{ToolUsage, TrajectorySummary, build_summary};

use aitrail_types::{SummaryContext, TrajectoryCollection};

// Façade API - stable entry point for callers that want the whole
// filter-then-summarize pipeline in one step.

/// Narrow a collection to one conversation and summarize it.
pub fn summarize_conversation(
    collection: &TrajectoryCollection,
    conversation_id: &str,
    context: Option<&SummaryContext>,
) -> TrajectorySummary {
    build_summary(&filter_collection(collection, conversation_id), context)
}
