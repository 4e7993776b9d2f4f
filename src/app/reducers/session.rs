//! Session sub-reducer: editor, query runs, history, saved queries.

use std::time::Instant;

use tracing::debug;

use crate::action::Action;
use crate::domain::{PredefinedQuery, SavedQueryId};
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::session::RunStart;
use crate::state::AppState;

fn run_query(state: &mut AppState, now: Instant) -> Vec<Effect> {
    match state.session.begin_run() {
        RunStart::Busy => vec![],
        RunStart::Rejected => {
            state.table.unmount();
            vec![]
        }
        RunStart::Started { query, generation } => {
            state.table.unmount();
            state.loading_since = Some(now);
            if state.ui.input_mode == InputMode::Editing {
                state.ui.input_mode = InputMode::Normal;
            }
            debug!(generation, "query run started");
            vec![Effect::ExecuteQuery { query, generation }]
        }
    }
}

fn delete_saved(state: &mut AppState, id: &SavedQueryId) -> Vec<Effect> {
    if !state.session.delete_saved_query(id) {
        return vec![];
    }
    let schema_len = state.schema_rows().len();
    state.ui.clamp_selections(
        state.session.history().len(),
        state.session.saved().len(),
        schema_len,
    );
    vec![Effect::PersistSavedQueries(state.session.saved_snapshot())]
}

fn edit(state: &mut AppState, action: &Action) -> bool {
    let session = &mut state.session;
    match action {
        Action::EditorInput(c) => session.insert_char(*c),
        Action::EditorNewline => session.insert_char('\n'),
        Action::EditorBackspace => session.backspace(),
        Action::EditorDelete => session.delete(),
        Action::EditorLeft => session.move_left(),
        Action::EditorRight => session.move_right(),
        Action::EditorUp => session.move_up(),
        Action::EditorDown => session.move_down(),
        Action::EditorHome => session.move_line_start(),
        Action::EditorEnd => session.move_line_end(),
        _ => return false,
    }
    true
}

pub fn reduce_session(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::EditorInput(_)
        | Action::EditorNewline
        | Action::EditorBackspace
        | Action::EditorDelete
        | Action::EditorLeft
        | Action::EditorRight
        | Action::EditorUp
        | Action::EditorDown
        | Action::EditorHome
        | Action::EditorEnd => {
            // The editor is read-only while a run is in progress.
            if !state.session.is_loading() {
                edit(state, action);
            }
            Some(vec![])
        }
        Action::EnterEditing => {
            if !state.session.is_loading() {
                state.ui.focused_pane = FocusedPane::Editor;
                state.ui.input_mode = InputMode::Editing;
            }
            Some(vec![])
        }
        Action::SetQueryInput(text) => {
            state.session.set_query_input(text.clone());
            Some(vec![])
        }
        Action::RunQuery => Some(run_query(state, now)),
        Action::QueryCompleted {
            generation,
            outcome,
            executed_at,
        } => {
            if !state
                .session
                .complete_run(*generation, outcome.clone(), *executed_at)
            {
                debug!(generation, "dropping stale query completion");
                return Some(vec![]);
            }
            state.loading_since = None;
            let mut effects = vec![Effect::PersistHistory(state.session.history().to_vec())];
            let table = state
                .session
                .result()
                .and_then(|r| r.as_table())
                .cloned();
            if let Some(table) = table {
                effects.push(state.table.mount(table).into());
            }
            Some(effects)
        }
        Action::ClearAll => {
            state.session.clear_all();
            state.table.unmount();
            state.loading_since = None;
            Some(vec![])
        }
        Action::SelectHistory(query) => {
            state.session.select_history(query);
            state.table.unmount();
            Some(vec![])
        }
        Action::SelectPredefined(id) => {
            let Some(predefined) = PredefinedQuery::find(id) else {
                return Some(vec![]);
            };
            if state.session.is_loading() {
                return Some(vec![]);
            }
            state.session.set_query_input(predefined.query);
            Some(vec![Effect::DispatchActions(vec![Action::RunQuery])])
        }
        Action::OpenSavePrompt => {
            state.ui.save_prompt.reset();
            state.ui.input_mode = InputMode::SavePrompt;
            Some(vec![])
        }
        Action::SavePromptInput(c) => {
            state.ui.save_prompt.name.push(*c);
            state.ui.save_prompt.error = None;
            Some(vec![])
        }
        Action::SavePromptBackspace => {
            state.ui.save_prompt.name.pop();
            Some(vec![])
        }
        Action::CloseSavePrompt => {
            state.ui.save_prompt.reset();
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::SaveQuery {
            name,
            query,
            saved_at,
        } => {
            let outcome = state.session.save_query(name, query, *saved_at);
            if outcome.success {
                state.ui.save_prompt.reset();
                if state.ui.input_mode == InputMode::SavePrompt {
                    state.ui.input_mode = InputMode::Normal;
                }
                state.feedback.success(outcome.message, now);
                Some(vec![Effect::PersistSavedQueries(
                    state.session.saved_snapshot(),
                )])
            } else {
                state.ui.save_prompt.error = Some(outcome.message.clone());
                state.feedback.error(outcome.message, now);
                Some(vec![])
            }
        }
        Action::LoadQuery(id) => {
            if state.session.load_query(id) {
                state.table.unmount();
            }
            Some(vec![])
        }
        Action::DeleteSavedQuery(id) => Some(delete_saved(state, id)),
        Action::DeleteSelectedSaved => {
            let id = state
                .session
                .saved()
                .get(state.ui.saved_selected)
                .map(|q| q.id.clone());
            Some(id.map_or_else(Vec::new, |id| delete_saved(state, &id)))
        }
        Action::InsertAtCursor { item, cursor } => {
            state.session.insert_at_cursor(item, *cursor);
            Some(vec![])
        }
        _ => None,
    }
}
