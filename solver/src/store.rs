use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store keys the solver reads and writes. Observers watch the same keys,
/// so the names are part of the wire contract.
pub mod keys {
    pub const ENABLED: &str = "enabled";
    pub const ENGINE_COLOR: &str = "engineColor";
    pub const MAX_DEPTH: &str = "maxDepth";
    pub const MAX_SOLVE_TIME: &str = "maxSolveTime";
    pub const DEFAULT_FEN: &str = "defaultFen";
    pub const IS_SOLVING: &str = "isSolving";
    pub const SOLVER_RESULT: &str = "solver_result";
}

/// Shared key/value state store.
///
/// The solver publishes its results and solving flag here and reads its
/// configuration from here; external observers consume the same keys.
pub trait SolverStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

impl<S: SolverStore + ?Sized> SolverStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// JSON-file-per-key store rooted at a directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SolverStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&contents)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(&value)?;
        std::fs::write(self.file_path(key), json)?;
        Ok(())
    }
}

/// In-memory store for tests and for embedding without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolverStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());

        store.set("isSolving", json!(true)).unwrap();
        assert_eq!(store.get("isSolving").unwrap(), Some(json!(true)));

        // Overwrite keeps the latest value.
        store.set("isSolving", json!(false)).unwrap();
        assert_eq!(store.get("isSolving").unwrap(), Some(json!(false)));
    }

    #[test]
    fn test_json_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_json_file_store_creates_dir_on_first_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("state"));
        store.set("enabled", json!(true)).unwrap();
        assert_eq!(store.get("enabled").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_json_file_store_structured_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf());
        let payload = json!({
            "best_move": "e2e4",
            "fen": "fen-a",
            "evaluation": 35,
            "depth": 10,
        });
        store.set("solver_result", payload.clone()).unwrap();
        assert_eq!(store.get("solver_result").unwrap(), Some(payload));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("enabled").unwrap(), None);
        store.set("enabled", json!(false)).unwrap();
        assert_eq!(store.get("enabled").unwrap(), Some(json!(false)));
    }
}
