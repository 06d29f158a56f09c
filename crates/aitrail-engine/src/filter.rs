use aitrail_types::{SessionScoped, TrajectoryCollection};

/// Order-preserving filter of any record sequence down to one conversation.
///
/// Empty input or a non-matching id yields an empty sequence.
pub fn filter_by_conversation<T: SessionScoped + Clone>(
    records: &[T],
    conversation_id: &str,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.conversation_id() == conversation_id)
        .cloned()
        .collect()
}

/// Filter every kind of a collection to one conversation.
pub fn filter_collection(
    collection: &TrajectoryCollection,
    conversation_id: &str,
) -> TrajectoryCollection {
    TrajectoryCollection {
        tool_calls: filter_by_conversation(&collection.tool_calls, conversation_id),
        shell: filter_by_conversation(&collection.shell, conversation_id),
        edits: filter_by_conversation(&collection.edits, conversation_id),
        responses: filter_by_conversation(&collection.responses, conversation_id),
    }
}
