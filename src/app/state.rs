use std::time::Instant;

use crate::domain::SchemaTable;
use crate::feedback::FeedbackSlot;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::schema_tree::{SchemaRow, flatten};
use crate::session::SessionState;
use crate::table_view::TableView;
use crate::ui_state::UiState;

pub struct AppState {
    pub should_quit: bool,
    pub session: SessionState,
    pub table: TableView,
    pub ui: UiState,
    pub feedback: FeedbackSlot,
    pub schema: Vec<SchemaTable>,
    /// Set when a run starts; drives the spinner frame.
    pub loading_since: Option<Instant>,
    pub render_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionState::default(), Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new(session: SessionState, schema: Vec<SchemaTable>, page_size: usize) -> Self {
        Self {
            should_quit: false,
            session,
            table: TableView::new(page_size),
            ui: UiState::default(),
            feedback: FeedbackSlot::default(),
            schema,
            loading_since: None,
            render_dirty: true,
        }
    }

    pub fn schema_rows(&self) -> Vec<SchemaRow<'_>> {
        flatten(&self.schema, &self.ui.schema_expanded)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.feedback.expire(now);
    }
}
