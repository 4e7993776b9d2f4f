use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

use super::Event;

/// Rows moved by PageUp / PageDown in the result table.
const PAGE_SCROLL: isize = 10;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if is_run_key(key) && matches!(state.ui.input_mode, InputMode::Normal | InputMode::Editing) {
        return Action::RunQuery;
    }

    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::Editing => handle_editing_keys(key),
        InputMode::Search => handle_search_keys(key),
        InputMode::SavePrompt => handle_save_prompt_keys(key, state),
        InputMode::Help => handle_help_keys(key),
    }
}

fn is_run_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::F(5) => true,
        KeyCode::Char('r') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn handle_normal_mode(key: KeyEvent, state: &AppState) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Action::ClearAll,
            KeyCode::Char('s') => Action::OpenSavePrompt,
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    let in_results = state.ui.focused_pane == FocusedPane::Results;

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Esc => Action::Escape,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char(c @ '1'..='6') => {
            FocusedPane::from_number_key(c).map_or(Action::None, Action::FocusPane)
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,
        KeyCode::PageUp if in_results => Action::ResultScroll(-PAGE_SCROLL),
        KeyCode::PageDown if in_results => Action::ResultScroll(PAGE_SCROLL),
        KeyCode::Enter => Action::ConfirmSelection,
        KeyCode::Char('i') => Action::EnterEditing,
        KeyCode::Char(' ') | KeyCode::Right if state.ui.focused_pane == FocusedPane::Schema => {
            Action::ToggleSchemaExpand
        }
        KeyCode::Char('d') if state.ui.focused_pane == FocusedPane::Saved => {
            Action::DeleteSelectedSaved
        }

        // Result table
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('s' | 'S') => Action::SortHighlighted,
        KeyCode::Char('h') | KeyCode::Left if in_results => Action::ColumnLeft,
        KeyCode::Char('l') | KeyCode::Right if in_results => Action::ColumnRight,
        KeyCode::Char('y') => Action::CopyResult,
        KeyCode::Char('e') => Action::ExportCsv { at: Local::now() },

        _ => Action::None,
    }
}

fn handle_editing_keys(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Action::ClearAll,
            KeyCode::Char('s') => Action::OpenSavePrompt,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Escape,
        KeyCode::Enter => Action::EditorNewline,
        KeyCode::Backspace => Action::EditorBackspace,
        KeyCode::Delete => Action::EditorDelete,
        KeyCode::Left => Action::EditorLeft,
        KeyCode::Right => Action::EditorRight,
        KeyCode::Up => Action::EditorUp,
        KeyCode::Down => Action::EditorDown,
        KeyCode::Home => Action::EditorHome,
        KeyCode::End => Action::EditorEnd,
        KeyCode::Tab => Action::EditorInput(' '),
        KeyCode::Char(c) => Action::EditorInput(c),
        _ => Action::None,
    }
}

fn handle_search_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::ClearSearch,
        KeyCode::Enter => Action::SubmitSearch,
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::SearchInput(c)
        }
        _ => Action::None,
    }
}

fn handle_save_prompt_keys(key: KeyEvent, state: &AppState) -> Action {
    match key.code {
        KeyCode::Esc => Action::CloseSavePrompt,
        KeyCode::Enter => Action::SaveQuery {
            name: state.ui.save_prompt.name.clone(),
            query: state.session.query().to_string(),
            saved_at: Local::now(),
        },
        KeyCode::Backspace => Action::SavePromptBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::SavePromptInput(c)
        }
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        _ => Action::None,
    }
}
