// store.rs

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const HISTORY_KEY: &str = "history";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("state encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Best-effort key/value persistence for session state.
pub trait Store: Send {
    fn load(&self, key: &str) -> Option<Value>;
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Option<Value> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// All keys in a single JSON object file, rewritten on every save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self, key: &str) -> Option<Value> {
        match self.read_all() {
            Ok(mut map) => map.remove(key),
            Err(e) => {
                log::warn!("ignoring unreadable state: {e}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        // Unreadable contents are overwritten.
        let mut map = self.read_all().unwrap_or_default();
        map.insert(key.to_string(), value.clone());
        let text = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
