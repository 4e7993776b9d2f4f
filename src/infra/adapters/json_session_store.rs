use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::app::ports::{SessionStore, StoreError};
use crate::domain::{HistoryEntry, SavedQuery};

const HISTORY_FILE_NAME: &str = "history.json";
const SAVED_QUERIES_FILE_NAME: &str = "saved_queries.json";

/// Keeps history and saved queries as pretty JSON arrays in one directory.
///
/// Writes are serialized through `write_lock`; each one goes to its own temp
/// file that is then persisted over the target.
pub struct JsonSessionStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonSessionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            write_lock: Mutex::new(()),
        }
    }

    fn read_list<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StoreError::ReadError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::InvalidFormat(e.to_string()))
    }

    fn write_list<T: Serialize>(&self, file_name: &str, items: &[T]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::WriteError(e.to_string()))?;

        // A writer that panicked never got as far as persisting.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        write_atomically(&self.data_dir, &self.data_dir.join(file_name), &content)
    }
}

/// Writes to a fresh temp file in `dir` and persists it over `path`.
fn write_atomically(dir: &Path, path: &Path, content: &str) -> Result<(), StoreError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::IoError(e.to_string()))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| StoreError::WriteError(e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| StoreError::IoError(e.error.to_string()))?;
    Ok(())
}

impl SessionStore for JsonSessionStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.read_list(HISTORY_FILE_NAME)
    }

    fn save_history(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        self.write_list(HISTORY_FILE_NAME, entries)
    }

    fn load_saved_queries(&self) -> Result<Vec<SavedQuery>, StoreError> {
        self.read_list(SAVED_QUERIES_FILE_NAME)
    }

    fn save_saved_queries(&self, queries: &[SavedQuery]) -> Result<(), StoreError> {
        self.write_list(SAVED_QUERIES_FILE_NAME, queries)
    }

    fn storage_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}
