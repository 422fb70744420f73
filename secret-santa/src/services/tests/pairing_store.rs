//! Tests for the file-backed pairing store

use crate::core::PairingMap;
use crate::error::{SantaError, StorageError};
use crate::services::{FilePairingStore, PAIRINGS_FILE};
use crate::traits::PairingStore;

use super::fixtures::*;

#[tokio::test]
async fn test_initialize_writes_empty_object() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());

    store.initialize().await.unwrap();

    let contents = std::fs::read_to_string(dir.path().join(PAIRINGS_FILE)).unwrap();
    assert_eq!(contents, "{}");
    assert!(store.read().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());
    let pairings = test_pairings();

    store.write(&pairings).await.unwrap();
    assert_eq!(store.read().await.unwrap(), pairings);
}

#[tokio::test]
async fn test_write_replaces_previous_map() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());

    store.write(&test_pairings()).await.unwrap();
    store.write(&PairingMap::new()).await.unwrap();

    assert!(store.read().await.unwrap().is_empty());
    // No temp file left behind after the rename
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() != PAIRINGS_FILE)
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_file_format_is_plain_json_object() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());
    store.write(&test_pairings()).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["u-ada"], "u-cy");
    assert_eq!(raw["u-bo"], "u-ada");
    assert_eq!(raw["u-cy"], "u-bo");
}

#[tokio::test]
async fn test_read_missing_file() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());

    let err = store.read().await.unwrap_err();
    assert!(matches!(err, SantaError::Storage(StorageError::Missing { .. })));
}

#[tokio::test]
async fn test_read_corrupt_file() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());
    std::fs::write(store.path(), "{\"u-ada\": ").unwrap();

    let err = store.read().await.unwrap_err();
    assert!(matches!(err, SantaError::Storage(StorageError::Malformed { .. })));
}

#[tokio::test]
async fn test_read_rejects_inconsistent_map() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());
    std::fs::write(store.path(), r#"{"u-ada":"u-ada","u-bo":"u-bo"}"#).unwrap();

    let err = store.read().await.unwrap_err();
    assert!(matches!(err, SantaError::Storage(StorageError::Malformed { .. })));
}

#[tokio::test]
async fn test_destroy_removes_file() {
    let dir = temp_dir();
    let store = FilePairingStore::in_appspace(dir.path());
    store.initialize().await.unwrap();

    store.destroy().await.unwrap();
    assert!(!store.path().exists());

    let err = store.destroy().await.unwrap_err();
    assert!(matches!(err, SantaError::Storage(StorageError::Missing { .. })));
}
