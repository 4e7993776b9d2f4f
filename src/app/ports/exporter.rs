use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Export directory unavailable: {0}")]
    DirectoryUnavailable(String),
    #[error("Failed to write {}: {message}", path.display())]
    WriteFailed { path: PathBuf, message: String },
    #[error("Could not encode CSV: {0}")]
    Encoding(String),
}

/// Writes exported result files. Returns the path that was written.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait ResultExporter: Send + Sync {
    fn export_csv(&self, contents: &str, file_name: &str) -> Result<PathBuf, ExportError>;
}
