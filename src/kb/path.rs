//! Path navigation into the knowledge document.

use std::sync::OnceLock;

use serde_json::{Map, Value};

/// Walk a `.`-separated path into the document.
///
/// Returns `None` if any segment is missing or a non-object is reached
/// before the path is exhausted.
#[must_use]
pub fn get_section<'a>(doc: &'a Value, dotted: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in dotted.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolve a keyword-table section path, substituting an empty object
/// when any segment is absent.
///
/// The empty-object sentinel keeps the topic acknowledged even when the
/// loaded knowledge-base version lacks that subtree.
#[must_use]
pub fn resolve_or_empty<'a>(doc: &'a Value, segments: &[&str]) -> &'a Value {
    let mut current = doc;
    for segment in segments {
        match current.get(segment) {
            Some(next) => current = next,
            None => return empty_object(),
        }
    }
    current
}

fn empty_object() -> &'static Value {
    static EMPTY: OnceLock<Value> = OnceLock::new();
    EMPTY.get_or_init(|| Value::Object(Map::new()))
}
