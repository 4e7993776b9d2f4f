use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::SavedQueryId;
use crate::focused_pane::FocusedPane;
use crate::pagination::Page;
use crate::ports::ExecutionOutcome;

/// Everything that can change `AppState`. Wall-clock timestamps travel inside
/// the actions that need them so the reducer never reads the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Focus and list navigation
    FocusNext,
    FocusPrev,
    FocusPane(FocusedPane),
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    ConfirmSelection,
    Escape,
    OpenHelp,
    CloseHelp,

    // Editor
    EnterEditing,
    EditorInput(char),
    EditorNewline,
    EditorBackspace,
    EditorDelete,
    EditorLeft,
    EditorRight,
    EditorUp,
    EditorDown,
    EditorHome,
    EditorEnd,

    // Session
    SetQueryInput(String),
    RunQuery,
    QueryCompleted {
        generation: u64,
        outcome: ExecutionOutcome,
        executed_at: DateTime<Local>,
    },
    ClearAll,
    SelectHistory(String),
    SelectPredefined(String),
    OpenSavePrompt,
    SavePromptInput(char),
    SavePromptBackspace,
    CloseSavePrompt,
    SaveQuery {
        name: String,
        query: String,
        saved_at: DateTime<Local>,
    },
    LoadQuery(SavedQueryId),
    DeleteSavedQuery(SavedQueryId),
    DeleteSelectedSaved,
    InsertAtCursor {
        item: String,
        cursor: Option<usize>,
    },
    ToggleSchemaExpand,

    // Result table
    EnterSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    ApplySearch,
    /// Applies the typed search now and leaves search mode.
    SubmitSearch,
    SortByColumn(usize),
    SortHighlighted,
    ColumnLeft,
    ColumnRight,
    ResultScroll(isize),
    ResultScrollTop,
    ResultScrollBottom,
    ViewportMeasured {
        width: u16,
        height: u16,
    },
    PageLoaded {
        generation: u64,
        page: Page,
    },
    PageFailed {
        generation: u64,
    },

    // Clipboard and export
    CopyResult,
    ExportCsv {
        at: DateTime<Local>,
    },
    ClipboardWritten,
    ClipboardFailed(String),
    ExportSucceeded(PathBuf),
    ExportFailed(String),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
