//! Knowledge base service: load-once access to the static document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Errors from loading the knowledge base source file.
#[derive(Error, Debug)]
pub enum KbError {
    #[error("Failed to read knowledge base {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse knowledge base {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Owns the in-memory knowledge document for the process lifetime.
///
/// The document is loaded at most once, on first access; repeated calls
/// return the cached value without re-reading the source. An unreadable or
/// malformed source leaves the service permanently without a document, and
/// queries then get the fixed unavailable reply.
pub struct KnowledgeBaseService {
    /// Candidate source files, tried in order.
    search_paths: Vec<PathBuf>,
    /// Load-once cell; `None` inside means no source was usable.
    document: OnceCell<Option<Value>>,
}

impl KnowledgeBaseService {
    /// Create a service that tries `primary` then `fallback`.
    #[must_use]
    pub fn new(primary: PathBuf, fallback: PathBuf) -> Self {
        Self {
            search_paths: vec![primary, fallback],
            document: OnceCell::new(),
        }
    }

    /// Create a service over an already-parsed document.
    #[must_use]
    pub fn from_document(document: Value) -> Self {
        Self {
            search_paths: Vec::new(),
            document: OnceCell::new_with(Some(Some(document))),
        }
    }

    /// Get the loaded document, loading it on first call.
    ///
    /// `None` means no candidate path yielded a parseable document; the
    /// condition is sticky for the service lifetime (the source is assumed
    /// static, so there is no retry on query).
    pub async fn document(&self) -> Option<&Value> {
        self.document
            .get_or_init(|| self.load_from_disk())
            .await
            .as_ref()
    }

    /// Look up a section of the loaded document by `.`-separated path.
    pub async fn section(&self, dotted: &str) -> Option<&Value> {
        let doc = self.document().await?;
        super::get_section(doc, dotted)
    }

    /// Get the candidate source paths for debugging.
    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    async fn load_from_disk(&self) -> Option<Value> {
        for path in &self.search_paths {
            match Self::try_load(path).await {
                Ok(doc) => {
                    tracing::info!(path = %path.display(), "Loaded knowledge base");
                    return Some(doc);
                }
                Err(KbError::Read { ref source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    tracing::debug!(path = %path.display(), "Knowledge base not found");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Unusable knowledge base source");
                }
            }
        }
        tracing::warn!("No knowledge base available");
        None
    }

    async fn try_load(path: &Path) -> Result<Value, KbError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| KbError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        serde_json::from_str(&content).map_err(|source| KbError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_from_document() {
        let service = KnowledgeBaseService::from_document(json!({"pricing": {}}));
        let doc = service.document().await.unwrap();
        assert!(doc.get("pricing").is_some());
    }

    #[tokio::test]
    async fn test_document_absent_when_no_paths() {
        let service = KnowledgeBaseService::new(
            PathBuf::from("/nonexistent/kb.json"),
            PathBuf::from("/also/nonexistent/kb.json"),
        );
        assert!(service.document().await.is_none());
        // Sticky: a second call must not suddenly succeed or panic.
        assert!(service.document().await.is_none());
    }

    #[tokio::test]
    async fn test_section_lookup() {
        let service =
            KnowledgeBaseService::from_document(json!({"plugins": {"jsfx": {"count": 350}}}));
        let section = service.section("plugins.jsfx").await.unwrap();
        assert_eq!(section["count"], 350);
        assert!(service.section("plugins.vst").await.is_none());
    }
}
