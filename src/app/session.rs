//! Query session: editor text, the current result, history and saved
//! queries.
//!
//! Every transition here is all-or-nothing on [`SessionState`]. The reducer
//! turns the return values into effects (execution, persistence).

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::warn;

use crate::domain::{ResultEnvelope, SavedQuery, SavedQueryId};
use crate::ports::{ExecutionOutcome, SessionStore};
use crate::query_history::QueryHistory;
use crate::saved_queries::SavedQueries;

pub const LOADING_MESSAGE: &str = "Loading results...";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an SQL query.";
pub const RUN_PROMPT_MESSAGE: &str = "Please run the query.";
pub const NO_RESULT_MESSAGE: &str = "No data or specific result for this query.";
pub const MISSING_NAME_MESSAGE: &str = "Please provide a name for the query.";
pub const EMPTY_SAVE_MESSAGE: &str = "Cannot save an empty query.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStart {
    /// Blank query; the result now carries the error message.
    Rejected,
    /// A run is already in progress.
    Busy,
    Started { query: String, generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

impl SaveOutcome {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    query: String,
    /// Char offset into `query`.
    cursor: usize,
    result: Option<ResultEnvelope>,
    loading: bool,
    running_query: Option<String>,
    run_generation: u64,
    history: QueryHistory,
    saved: SavedQueries,
}

impl SessionState {
    pub fn new(history: QueryHistory, saved: SavedQueries) -> Self {
        Self {
            history,
            saved,
            ..Default::default()
        }
    }

    /// Startup state from `store`. A list that cannot be read starts empty;
    /// the failure is only logged.
    pub fn load(store: &dyn SessionStore) -> Self {
        let history = store.load_history().unwrap_or_else(|e| {
            warn!(error = %e, "history unreadable, starting empty");
            Vec::new()
        });
        let saved = store.load_saved_queries().unwrap_or_else(|e| {
            warn!(error = %e, "saved queries unreadable, starting empty");
            Vec::new()
        });
        Self::new(
            QueryHistory::from_entries(history),
            SavedQueries::from_items(saved),
        )
    }

    // ---- accessors ----

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The insertion point for schema items, or `None` while the editor is
    /// disabled.
    pub fn editor_cursor(&self) -> Option<usize> {
        (!self.loading).then_some(self.cursor)
    }

    pub fn result(&self) -> Option<&ResultEnvelope> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn run_generation(&self) -> u64 {
        self.run_generation
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    pub fn saved(&self) -> &SavedQueries {
        &self.saved
    }

    // ---- transitions ----

    /// Replaces the editor text and puts the cursor at its end.
    pub fn set_query_input(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cursor = self.query.chars().count();
    }

    pub fn begin_run(&mut self) -> RunStart {
        if self.loading {
            return RunStart::Busy;
        }
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.result = Some(ResultEnvelope::error(EMPTY_QUERY_MESSAGE));
            return RunStart::Rejected;
        }
        let query = trimmed.to_string();
        self.run_generation += 1;
        self.loading = true;
        self.result = Some(ResultEnvelope::loading(LOADING_MESSAGE));
        self.running_query = Some(query.clone());
        RunStart::Started {
            query,
            generation: self.run_generation,
        }
    }

    /// Applies an executor outcome. Returns false (and changes nothing) for a
    /// stale generation.
    pub fn complete_run(
        &mut self,
        generation: u64,
        outcome: ExecutionOutcome,
        executed_at: DateTime<Local>,
    ) -> bool {
        if generation != self.run_generation || !self.loading {
            return false;
        }
        let envelope = match outcome {
            ExecutionOutcome::Table(table) => ResultEnvelope::table(Arc::new(table)),
            ExecutionOutcome::Message { status, text } => ResultEnvelope::message(status, text),
            ExecutionOutcome::Empty => ResultEnvelope::success_message(NO_RESULT_MESSAGE),
        };
        self.result = Some(envelope);
        self.loading = false;
        if let Some(query) = self.running_query.take() {
            self.history.record(&query, executed_at);
        }
        true
    }

    pub fn clear_all(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.result = None;
        self.loading = false;
        self.running_query = None;
        self.run_generation += 1;
    }

    pub fn select_history(&mut self, query: &str) {
        self.set_query_input(query);
        self.result = Some(ResultEnvelope::warning(RUN_PROMPT_MESSAGE));
    }

    pub fn save_query(&mut self, name: &str, query: &str, at: DateTime<Local>) -> SaveOutcome {
        let name = name.trim();
        let query = query.trim();
        if name.is_empty() {
            return SaveOutcome::failure(MISSING_NAME_MESSAGE);
        }
        if query.is_empty() {
            return SaveOutcome::failure(EMPTY_SAVE_MESSAGE);
        }
        self.saved.upsert(name, query, at);
        SaveOutcome {
            success: true,
            message: format!("Query \"{name}\" saved successfully."),
        }
    }

    /// Returns false when no saved query has that id.
    pub fn load_query(&mut self, id: &SavedQueryId) -> bool {
        let Some(text) = self.saved.find(id).map(|q| q.query.clone()) else {
            return false;
        };
        self.set_query_input(text);
        self.result = Some(ResultEnvelope::warning(RUN_PROMPT_MESSAGE));
        true
    }

    pub fn delete_saved_query(&mut self, id: &SavedQueryId) -> bool {
        self.saved.remove(id)
    }

    /// Splices `item` into the query at char offset `cursor` (clamped to the
    /// text length) and leaves the cursor after it. `None` means there is no
    /// editor to insert into.
    pub fn insert_at_cursor(&mut self, item: &str, cursor: Option<usize>) -> bool {
        let Some(cursor) = cursor else {
            return false;
        };
        let at = cursor.min(char_count(&self.query));
        let byte = char_to_byte_index(&self.query, at);
        self.query.insert_str(byte, item);
        self.cursor = at + char_count(item);
        true
    }

    pub fn saved_snapshot(&self) -> Vec<SavedQuery> {
        self.saved.to_vec()
    }

    // ---- editor ----

    pub fn insert_char(&mut self, c: char) {
        let byte = char_to_byte_index(&self.query, self.cursor);
        self.query.insert(byte, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte = char_to_byte_index(&self.query, self.cursor);
        self.query.remove(byte);
    }

    pub fn delete(&mut self) {
        if self.cursor >= char_count(&self.query) {
            return;
        }
        let byte = char_to_byte_index(&self.query, self.cursor);
        self.query.remove(byte);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(char_count(&self.query));
    }

    pub fn move_line_start(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = line_start(&self.query, row);
    }

    pub fn move_line_end(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = line_start(&self.query, row) + line_len(&self.query, row);
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row > 0 {
            self.cursor = line_start(&self.query, row - 1) + col.min(line_len(&self.query, row - 1));
        }
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 < self.query.split('\n').count() {
            self.cursor = line_start(&self.query, row + 1) + col.min(line_len(&self.query, row + 1));
        }
    }

    /// Zero-based (line, column) of the cursor, in chars.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for c in self.query.chars().take(self.cursor) {
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }
}

pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

fn line_start(s: &str, row: usize) -> usize {
    s.split('\n').take(row).map(|line| char_count(line) + 1).sum()
}

fn line_len(s: &str, row: usize) -> usize {
    s.split('\n').nth(row).map_or(0, char_count)
}
