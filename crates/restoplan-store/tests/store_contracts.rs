//! Behavioral contract tests for artifact store backends.
//!
//! The fake and the local-filesystem backend must agree on discovery
//! ordering, bundle contents, and missing-artifact behavior.

use restoplan_models::RawBundle;
use restoplan_store::fakes::MemoryArtifactStore;
use restoplan_store::{ArtifactStore, LocalArtifactStore, StoreError};

fn bundle(tag: u8) -> RawBundle {
    RawBundle {
        preprocessor: vec![b'p', tag],
        time_model: vec![b't', tag],
        success_model: vec![b's', tag],
    }
}

// ===========================================================================
// MemoryArtifactStore
// ===========================================================================

#[tokio::test]
async fn memory_discovery_is_sorted() {
    let store = MemoryArtifactStore::new();
    store.insert("suspension", bundle(1));
    store.insert("brakes", bundle(2));
    store.insert("engine", bundle(3));

    let components = store.discover_components().await.unwrap();
    assert_eq!(components, vec!["brakes", "engine", "suspension"]);
}

#[tokio::test]
async fn memory_fetch_round_trip() {
    let store = MemoryArtifactStore::new();
    store.insert("brakes", bundle(7));

    let fetched = store.fetch_bundle("brakes").await.unwrap();
    assert_eq!(fetched.preprocessor, vec![b'p', 7]);
    assert_eq!(fetched.time_model, vec![b't', 7]);
    assert_eq!(fetched.success_model, vec![b's', 7]);
}

#[tokio::test]
async fn memory_missing_component_is_not_found() {
    let store = MemoryArtifactStore::new();
    let err = store.fetch_bundle("engine").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn memory_empty_store_discovers_nothing() {
    let store = MemoryArtifactStore::new();
    assert!(store.discover_components().await.unwrap().is_empty());
}

// ===========================================================================
// LocalArtifactStore
// ===========================================================================

fn write_trio(dir: &std::path::Path, component: &str) {
    for (suffix, body) in [
        ("preprocessor", "{\"features\":[]}"),
        ("time", "{\"weights\":[],\"intercept\":30.0}"),
        ("success", "{\"weights\":[],\"intercept\":0.5}"),
    ] {
        std::fs::write(dir.join(format!("{component}_{suffix}.json")), body).unwrap();
    }
}

#[tokio::test]
async fn local_discovery_strips_time_suffix_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write_trio(dir.path(), "suspension");
    write_trio(dir.path(), "brakes");
    // stray files are ignored
    std::fs::write(dir.path().join("notes.txt"), "misc").unwrap();

    let store = LocalArtifactStore::new(dir.path());
    let components = store.discover_components().await.unwrap();
    assert_eq!(components, vec!["brakes", "suspension"]);
}

#[tokio::test]
async fn local_fetch_returns_file_bytes() {
    let dir = tempfile::tempdir().unwrap();
    write_trio(dir.path(), "engine");

    let store = LocalArtifactStore::new(dir.path());
    let fetched = store.fetch_bundle("engine").await.unwrap();
    assert_eq!(fetched.preprocessor, b"{\"features\":[]}");
}

#[tokio::test]
async fn local_missing_directory_is_an_empty_store() {
    let store = LocalArtifactStore::new("/nonexistent/artifact/dir");
    assert!(store.discover_components().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_incomplete_trio_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    // only the time artifact exists
    std::fs::write(
        dir.path().join("brakes_time.json"),
        "{\"weights\":[],\"intercept\":1.0}",
    )
    .unwrap();

    let store = LocalArtifactStore::new(dir.path());
    let err = store.fetch_bundle("brakes").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn local_location_names_the_directory() {
    let store = LocalArtifactStore::new("/srv/restoplan/artifacts");
    assert_eq!(store.location(), "/srv/restoplan/artifacts");
}
