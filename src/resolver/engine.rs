//! The resolve operation: free text in, formatted reply out.

use std::collections::BTreeSet;

use serde_json::Value;

use super::{search_leaves, KEYWORD_TABLE};
use crate::kb::resolve_or_empty;

/// Reply when no document could be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Knowledge base not loaded.";

/// Reply when neither the keyword table nor the leaf search matched.
pub const SUGGESTION_MESSAGE: &str = "I couldn't find specific information about that. Try asking about:
- Pricing & licensing
- Features
- Plugins (ReaPlugs, JSFX)
- Extensions (SWS, ReaPack, Playtime)
- Live looping
- Shortcuts
- Workflows (podcast, audiobook, film)";

/// Default cap on fallback search results.
pub const MAX_SEARCH_RESULTS: usize = 15;

/// Resolves free-text questions against the knowledge document.
///
/// Pure: resolution has no side effects beyond tracing, never errors, and
/// always returns a displayable string for any (query, document) pairing.
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Cap on the number of leaf-search hits included in a reply.
    pub max_search_results: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            max_search_results: MAX_SEARCH_RESULTS,
        }
    }
}

impl Resolver {
    /// Resolve a query, in strict precedence order: absent-document guard,
    /// blank-query guard, keyword-table match, recursive leaf search, topic
    /// suggestion.
    #[must_use]
    pub fn resolve(&self, query: &str, doc: Option<&Value>) -> String {
        let Some(doc) = doc else {
            return UNAVAILABLE_MESSAGE.to_string();
        };

        // A blank query would substring-match every leaf below; suggest
        // topics instead of dumping the whole document.
        let query_lower = query.to_lowercase();
        if query_lower.trim().is_empty() {
            tracing::debug!("Blank query, suggesting topics");
            return SUGGESTION_MESSAGE.to_string();
        }

        let matched = Self::match_keywords(&query_lower, doc);
        if !matched.is_empty() {
            tracing::debug!(sections = matched.len(), "Keyword match");
            return matched
                .iter()
                .map(|(label, dump)| format!("**{label}**:\n```json\n{dump}\n```"))
                .collect::<Vec<_>>()
                .join("\n\n---\n\n");
        }

        let hits = search_leaves(doc, &query_lower);
        if !hits.is_empty() {
            tracing::debug!(hits = hits.len(), "Leaf search match");
            return hits
                .into_iter()
                .take(self.max_search_results)
                .collect::<Vec<_>>()
                .join("\n\n");
        }

        tracing::debug!("No match, suggesting topics");
        SUGGESTION_MESSAGE.to_string()
    }

    /// Collect (label, pretty-printed content) pairs for every table keyword
    /// occurring in the query.
    ///
    /// A keyword whose section path is absent from this document still
    /// matches, with empty-object content: the topic is acknowledged even
    /// when the loaded knowledge-base version lacks that subtree. The set
    /// deduplicates two keywords surfacing identical content under the same
    /// label.
    fn match_keywords(query_lower: &str, doc: &Value) -> BTreeSet<(String, String)> {
        let mut matched = BTreeSet::new();
        for entry in KEYWORD_TABLE {
            if query_lower.contains(entry.keyword) {
                let section = resolve_or_empty(doc, entry.path);
                matched.insert((entry.label.to_string(), pretty(section)));
            }
        }
        matched
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "pricing": {"discounted": "$60", "commercial": "$225"},
            "plugins": {"reaPlugs": {"name": "ReaPlugs"}},
            "extensions": {"sws": {"name": "SWS Extension"}},
            "troubleshooting": {"latency": "Lower your buffer size"}
        })
    }

    #[test]
    fn test_absent_document_returns_unavailable() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("price", None), UNAVAILABLE_MESSAGE);
        assert_eq!(resolver.resolve("", None), UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_blank_query_suggests_topics() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        assert_eq!(resolver.resolve("", Some(&doc)), SUGGESTION_MESSAGE);
        assert_eq!(resolver.resolve("   \t", Some(&doc)), SUGGESTION_MESSAGE);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        let reply = resolver.resolve("What is the PRICE?", Some(&doc));
        assert!(reply.contains("**pricing**"));
        assert!(reply.contains("$60"));
        assert!(reply.contains("$225"));
    }

    #[test]
    fn test_two_keywords_two_sections() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        let reply = resolver.resolve("price of the sws extension", Some(&doc));
        assert!(reply.contains("**pricing**"));
        assert!(reply.contains("**extensions**"));
        assert!(reply.contains("\n\n---\n\n"));
    }

    #[test]
    fn test_same_section_deduplicated() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        // "price" and "cost" both surface the pricing section.
        let reply = resolver.resolve("price cost", Some(&doc));
        assert_eq!(reply.matches("**pricing**").count(), 1);
    }

    #[test]
    fn test_missing_section_path_still_acknowledged() {
        let resolver = Resolver::default();
        let doc = json!({"plugins": {}});
        let reply = resolver.resolve("tell me about jsfx", Some(&doc));
        assert!(reply.contains("**plugins**"));
        assert!(reply.contains("{}"));
    }

    #[test]
    fn test_fallback_leaf_search() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        // "buffer" is not a table keyword but appears in a leaf.
        let reply = resolver.resolve("buffer", Some(&doc));
        assert!(reply.contains("troubleshooting.latency: Lower your buffer size"));
    }

    #[test]
    fn test_fallback_capped() {
        let resolver = Resolver::default();
        let leaves: Vec<Value> = (0..40).map(|i| json!(format!("needle {i}"))).collect();
        let doc = json!({"big": leaves});
        let reply = resolver.resolve("needle", Some(&doc));
        assert_eq!(reply.split("\n\n").count(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn test_no_match_suggests_topics() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        assert_eq!(
            resolver.resolve("xyzzy-nonsense", Some(&doc)),
            SUGGESTION_MESSAGE
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = Resolver::default();
        let doc = sample_doc();
        let first = resolver.resolve("plugins and looping", Some(&doc));
        let second = resolver.resolve("plugins and looping", Some(&doc));
        assert_eq!(first, second);
    }
}
