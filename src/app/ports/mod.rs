pub mod clipboard;
pub mod exporter;
pub mod query_executor;
pub mod renderer;
pub mod session_store;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use exporter::{ExportError, ResultExporter};
pub use query_executor::{ExecutionOutcome, QueryExecutor};
pub use renderer::{RenderOutput, Renderer};
pub use session_store::{SessionStore, StoreError};

#[cfg(any(test, feature = "test-support"))]
pub use clipboard::MockClipboardWriter;
#[cfg(any(test, feature = "test-support"))]
pub use exporter::MockResultExporter;
#[cfg(any(test, feature = "test-support"))]
pub use query_executor::MockQueryExecutor;
#[cfg(any(test, feature = "test-support"))]
pub use session_store::MockSessionStore;
