use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{HistoryEntry, SavedQuery};

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Persistence for query history and saved queries. A missing store reads as
/// empty lists.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    fn save_history(&self, entries: &[HistoryEntry]) -> Result<(), StoreError>;

    fn load_saved_queries(&self) -> Result<Vec<SavedQuery>, StoreError>;

    fn save_saved_queries(&self, queries: &[SavedQuery]) -> Result<(), StoreError>;

    fn storage_dir(&self) -> PathBuf;
}
