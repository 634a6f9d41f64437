use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::{SnapshotStore, StoreKey};

/// Errors that can occur when loading a store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Snapshot of the shared blob as persisted on disk.
///
/// The file is a flat JSON object whose values are strings, e.g.
/// `{"widget_summary": "{...}", "currency_code": "USD"}`. Entries whose
/// value is not a string are skipped.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    values: HashMap<String, String>,
}

impl FileStore {
    /// Reads the store file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Store file missing, treating as empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: HashMap<String, Value> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let values = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                other => {
                    tracing::warn!(key = %key, kind = %value_kind(&other), "Ignoring non-string store entry");
                    None
                }
            })
            .collect();

        Ok(Self { values })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: StoreKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }
}
