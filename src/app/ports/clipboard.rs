use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    fn write(&self, content: &str) -> Result<(), ClipboardError>;
}
