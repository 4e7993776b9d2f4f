use std::collections::BTreeSet;

use super::focused_pane::FocusedPane;
use super::input_mode::InputMode;

/// Name entry for saving the current query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavePrompt {
    pub name: String,
    /// Validation failure from the last attempt, shown inside the prompt.
    pub error: Option<String>,
}

impl SavePrompt {
    pub fn reset(&mut self) {
        self.name.clear();
        self.error = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focused_pane: FocusedPane,
    pub input_mode: InputMode,

    pub predefined_selected: usize,
    pub schema_selected: usize,
    pub schema_expanded: BTreeSet<usize>,
    pub history_selected: usize,
    pub saved_selected: usize,

    pub save_prompt: SavePrompt,
    pub help_scroll_offset: usize,

    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl UiState {
    /// Selection cursor of a list pane; `None` for the editor and results.
    pub fn selection_mut(&mut self, pane: FocusedPane) -> Option<&mut usize> {
        match pane {
            FocusedPane::Predefined => Some(&mut self.predefined_selected),
            FocusedPane::Schema => Some(&mut self.schema_selected),
            FocusedPane::History => Some(&mut self.history_selected),
            FocusedPane::Saved => Some(&mut self.saved_selected),
            FocusedPane::Editor | FocusedPane::Results => None,
        }
    }

    /// Moves the focused list's selection by `delta`, clamped to `len`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        let pane = self.focused_pane;
        if let Some(selected) = self.selection_mut(pane) {
            *selected = step(*selected, delta, len);
        }
    }

    pub fn clamp_selections(&mut self, history_len: usize, saved_len: usize, schema_len: usize) {
        self.history_selected = clamp_index(self.history_selected, history_len);
        self.saved_selected = clamp_index(self.saved_selected, saved_len);
        self.schema_selected = clamp_index(self.schema_selected, schema_len);
    }

    pub fn toggle_schema_table(&mut self, index: usize) {
        if !self.schema_expanded.remove(&index) {
            self.schema_expanded.insert(index);
        }
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    };
    moved.min(len - 1)
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
