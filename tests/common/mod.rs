//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write a store file holding the given string entries.
pub fn temp_store(entries: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("store.json");

    let map: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(key, value)| (key.to_string(), serde_json::Value::from(*value)))
        .collect();
    let content = serde_json::to_string(&map).expect("Failed to encode store");

    std::fs::write(&store_path, content).expect("Failed to write store");
    (temp_dir, store_path)
}

/// Write a config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
