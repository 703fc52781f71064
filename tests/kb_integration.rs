//! Integration tests for knowledge base loading.

use std::path::PathBuf;

use reaper_kb_chat::kb::KnowledgeBaseService;
use reaper_kb_chat::resolver::{Resolver, UNAVAILABLE_MESSAGE};

fn write_kb(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_loads_primary_path() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_kb(&dir, "kb.json", r#"{"pricing": {"discounted": "$60"}}"#);
    let service = KnowledgeBaseService::new(primary, dir.path().join("missing.json"));

    let doc = service.document().await.unwrap();
    assert_eq!(doc["pricing"]["discounted"], "$60");
}

#[tokio::test]
async fn test_falls_back_when_primary_missing() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = write_kb(&dir, "fallback.json", r#"{"features": {}}"#);
    let service = KnowledgeBaseService::new(dir.path().join("missing.json"), fallback);

    let doc = service.document().await.unwrap();
    assert!(doc.get("features").is_some());
}

#[tokio::test]
async fn test_falls_back_when_primary_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_kb(&dir, "broken.json", "{not json");
    let fallback = write_kb(&dir, "fallback.json", r#"{"themes": {}}"#);
    let service = KnowledgeBaseService::new(primary, fallback);

    let doc = service.document().await.unwrap();
    assert!(doc.get("themes").is_some());
}

#[tokio::test]
async fn test_malformed_everywhere_collapses_to_absent() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_kb(&dir, "a.json", "{broken");
    let fallback = write_kb(&dir, "b.json", "[1, 2,");
    let service = KnowledgeBaseService::new(primary, fallback);

    assert!(service.document().await.is_none());

    // Every query against the absent document gets the fixed reply.
    let resolver = Resolver::default();
    let reply = resolver.resolve("price", service.document().await);
    assert_eq!(reply, UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn test_document_is_loaded_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_kb(&dir, "kb.json", r#"{"shortcuts": {"space": "Play"}}"#);
    let service = KnowledgeBaseService::new(primary.clone(), dir.path().join("missing.json"));

    let first = service.document().await.unwrap();

    // Replace the source: the cached document must not change.
    std::fs::write(&primary, r#"{"shortcuts": {"space": "Stop"}}"#).unwrap();
    let second = service.document().await.unwrap();

    assert!(std::ptr::eq(first, second), "must return the cached value");
    assert_eq!(second["shortcuts"]["space"], "Play");
}

#[tokio::test]
async fn test_section_navigation_on_loaded_document() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_kb(
        &dir,
        "kb.json",
        r#"{"extensions": {"sws": {"name": "SWS Extension"}}}"#,
    );
    let service = KnowledgeBaseService::new(primary, dir.path().join("missing.json"));

    let sws = service.section("extensions.sws").await.unwrap();
    assert_eq!(sws["name"], "SWS Extension");
    assert!(service.section("extensions.nope").await.is_none());
}
