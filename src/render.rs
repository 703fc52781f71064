//! Human-readable rendering of a single knowledge-base section.
//!
//! Presentation transform only: keys become bold labels, nested objects
//! indent, arrays become dash lists. The primary resolve flow dumps matched
//! sections as fenced JSON instead; this renderer is for callers that want
//! one section as prose-like text.

use serde_json::{Map, Value};

const NO_DATA: &str = "No data available for this section.";

/// Render a section as an indented, labeled text block.
#[must_use]
pub fn render_section(section: &Value) -> String {
    match section {
        Value::Object(map) if !map.is_empty() => render_object(map, 0),
        Value::Object(_) | Value::Null => NO_DATA.to_string(),
        other => scalar_text(other),
    }
}

fn render_object(map: &Map<String, Value>, indent: usize) -> String {
    let prefix = "  ".repeat(indent);
    let mut lines = Vec::new();
    for (key, value) in map {
        match value {
            Value::Object(inner) => {
                lines.push(format!("{prefix}**{key}**:"));
                lines.push(render_object(inner, indent + 1));
            }
            Value::Array(items) => {
                lines.push(format!("{prefix}**{key}**:"));
                for item in items {
                    match item {
                        Value::Object(inner) => lines.push(render_object(inner, indent + 1)),
                        scalar => lines.push(format!("{prefix}  - {}", scalar_text(scalar))),
                    }
                }
            }
            scalar => lines.push(format!("{prefix}**{key}**: {}", scalar_text(scalar))),
        }
    }
    lines.join("\n")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
