//! Side effects returned by the reducer, executed by EffectRunner.

use crate::action::Action;
use crate::domain::{HistoryEntry, SavedQuery};
use crate::export::ClipboardPayload;
use crate::result_processor::ProcessedRows;
use crate::table_view::PageRequest;

#[derive(Debug, Clone)]
pub enum Effect {
    Render,

    /// Result comes back as `Action::QueryCompleted` with the same generation.
    ExecuteQuery {
        query: String,
        generation: u64,
    },

    /// Result comes back as `Action::PageLoaded` or `Action::PageFailed`.
    FetchPage(PageRequest),

    PersistHistory(Vec<HistoryEntry>),
    PersistSavedQueries(Vec<SavedQuery>),

    /// Formatted and written off the reducer loop.
    CopyToClipboard {
        payload: ClipboardPayload,
    },
    ExportCsv {
        rows: ProcessedRows,
        file_name: String,
    },

    /// Runs the inner effects in order
    Sequence(Vec<Effect>),

    /// Dispatch actions to be processed by the reducer
    DispatchActions(Vec<Action>),
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

impl From<PageRequest> for Effect {
    fn from(request: PageRequest) -> Self {
        Self::FetchPage(request)
    }
}
