//! Recursive full-text search over the knowledge document.
//!
//! Depth-first fold over the JSON value: every string leaf containing the
//! query (case-insensitive) is reported as `path: original text`, with `.key`
//! for object steps and `[index]` for array steps.

use serde_json::Value;

/// Collect all string leaves containing `query_lower`, in traversal order.
///
/// `query_lower` must already be lowercased by the caller. Arrays are walked
/// in index order; objects in their natural map order.
#[must_use]
pub fn search_leaves(doc: &Value, query_lower: &str) -> Vec<String> {
    let mut hits = Vec::new();
    visit(doc, "", query_lower, &mut hits);
    hits
}

fn visit(value: &Value, path: &str, query_lower: &str, hits: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            if s.to_lowercase().contains(query_lower) {
                hits.push(format!("{path}: {s}"));
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                visit(item, &format!("{path}[{i}]"), query_lower, hits);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                visit(child, &child_path, query_lower, hits);
            }
        }
        // Numbers, booleans, and nulls are not searchable text.
        _ => {}
    }
}
