use serde_json::Value;
use thiserror::Error;

/// Tag-name prefix marking an article as part of a series.
const SERIES_PREFIX: &str = "sc:series";

/// Categories allowed through to the blog listing. Fixed configuration, not
/// runtime state.
pub const CATEGORY_WHITELIST: &[&str] = &[
    "Articles",
    "Canonical News",
    "Case studies",
    "Design",
    "Desktop",
    "Development",
];

#[derive(Debug, Error)]
pub enum TagError {
    /// A tag record lacked an `id` field during id extraction.
    #[error("tag at index {index} is missing its \"id\" field")]
    MissingId { index: usize },

    /// A tag's `id` field was present but not a non-negative integer.
    #[error("tag at index {index} has a non-integer \"id\" field")]
    InvalidId { index: usize },
}

/// Extracts the `id` of every tag, preserving input order.
///
/// Fails on the first tag whose `id` is absent or not a non-negative
/// integer — a tag record without a usable identifier is upstream data
/// corruption, not something to skip over.
pub fn tag_ids(tags: &[Value]) -> Result<Vec<u64>, TagError> {
    tags.iter()
        .enumerate()
        .map(|(index, tag)| {
            tag.get("id")
                .ok_or(TagError::MissingId { index })?
                .as_u64()
                .ok_or(TagError::InvalidId { index })
        })
        .collect()
}

/// True iff any tag's `name` starts with `sc:series`.
///
/// Short-circuits on the first match; empty input (and tags without a string
/// `name`) is simply not in a series.
pub fn is_in_series(tags: &[Value]) -> bool {
    tags.iter().any(|tag| {
        tag.get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.starts_with(SERIES_PREFIX))
    })
}

/// Keeps only the categories whose `name` is on [`CATEGORY_WHITELIST`].
///
/// Original order and original values, no copying; unmatched entries are
/// dropped silently. Pure with respect to the retained records, so applying
/// it twice yields the same result as once.
pub fn filter_categories(mut categories: Vec<Value>) -> Vec<Value> {
    categories.retain(|category| {
        category
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| CATEGORY_WHITELIST.contains(&name))
    });
    categories
}
