use arboard::Clipboard;

use crate::app::ports::{ClipboardError, ClipboardWriter};

/// System clipboard adapter. Opens a fresh handle for every write.
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write(&self, content: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(content.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
