use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::app::ports::{ExportError, ResultExporter};

/// Writes exported CSV files into a fixed directory, creating it on demand.
pub struct CsvFileExporter {
    export_dir: PathBuf,
}

impl CsvFileExporter {
    pub fn new(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }
}

impl ResultExporter for CsvFileExporter {
    fn export_csv(&self, contents: &str, file_name: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.export_dir)
            .map_err(|e| ExportError::DirectoryUnavailable(e.to_string()))?;

        let path = self.export_dir.join(file_name);
        fs::write(&path, contents).map_err(|e| ExportError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), bytes = contents.len(), "exported result");
        Ok(path)
    }
}
