mod common;

use hisabi_surfaces::store::{FileStore, SnapshotStore, StoreError, StoreKey};
use std::path::Path;

#[test]
fn test_load_reads_string_entries() {
    let (_dir, path) = common::temp_store(&[
        ("widget_summary", r#"{"totalThisMonth": 12}"#),
        ("currency_code", "GBP"),
    ]);

    let store = FileStore::load(&path).expect("store loads");
    assert_eq!(
        store.read(StoreKey::Summary).as_deref(),
        Some(r#"{"totalThisMonth": 12}"#)
    );
    assert_eq!(store.currency_code("USD"), "GBP");
    assert_eq!(store.read(StoreKey::Settings), None);
}

#[test]
fn test_missing_file_is_empty_store() {
    let store = FileStore::load(Path::new("/nonexistent/widget_store.json")).expect("empty store");
    assert_eq!(store.read(StoreKey::Summary), None);
    assert_eq!(store.currency_code("USD"), "USD");
}

#[test]
fn test_non_string_entries_are_ignored() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("store.json");
    std::fs::write(
        &path,
        r#"{"widget_summary": {"totalThisMonth": 1}, "currency_code": "AED"}"#,
    )
    .expect("write store");

    let store = FileStore::load(&path).expect("store loads");
    assert_eq!(store.read(StoreKey::Summary), None);
    assert_eq!(store.read(StoreKey::CurrencyCode).as_deref(), Some("AED"));
}

#[test]
fn test_blank_currency_falls_back() {
    let (_dir, path) = common::temp_store(&[("currency_code", "   ")]);
    let store = FileStore::load(&path).expect("store loads");
    assert_eq!(store.currency_code("USD"), "USD");
}

#[test]
fn test_invalid_json_is_parse_error() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("store.json");
    std::fs::write(&path, "not json").expect("write store");

    assert!(matches!(
        FileStore::load(&path),
        Err(StoreError::ParseError { .. })
    ));
}
