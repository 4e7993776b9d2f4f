//! Navigation sub-reducer: focus, list selection, help and escape handling.

use std::time::Instant;

use super::page_effects;
use crate::action::Action;
use crate::domain::PREDEFINED_QUERIES;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::schema_tree::SchemaRow;
use crate::state::AppState;

fn list_len(state: &AppState, pane: FocusedPane) -> usize {
    match pane {
        FocusedPane::Predefined => PREDEFINED_QUERIES.len(),
        FocusedPane::Schema => state.schema_rows().len(),
        FocusedPane::History => state.session.history().len(),
        FocusedPane::Saved => state.session.saved().len(),
        FocusedPane::Editor | FocusedPane::Results => 0,
    }
}

fn select(state: &mut AppState, delta: isize) -> Vec<Effect> {
    match state.ui.input_mode {
        InputMode::Help => {
            state.ui.help_scroll_offset = if delta.is_negative() {
                state.ui.help_scroll_offset.saturating_sub(delta.unsigned_abs())
            } else {
                state.ui.help_scroll_offset.saturating_add(delta.unsigned_abs())
            };
            return vec![];
        }
        InputMode::Normal => {}
        _ => return vec![],
    }
    let pane = state.ui.focused_pane;
    if pane == FocusedPane::Results {
        return page_effects(state.table.scroll(delta));
    }
    let len = list_len(state, pane);
    state.ui.move_selection(delta, len);
    vec![]
}

fn select_edge(state: &mut AppState, last: bool) -> Vec<Effect> {
    if state.ui.input_mode != InputMode::Normal {
        return vec![];
    }
    let pane = state.ui.focused_pane;
    if pane == FocusedPane::Results {
        if last {
            return page_effects(state.table.scroll_to_bottom());
        }
        state.table.scroll_to_top();
        return vec![];
    }
    let len = list_len(state, pane);
    if let Some(selected) = state.ui.selection_mut(pane) {
        *selected = if last { len.saturating_sub(1) } else { 0 };
    }
    vec![]
}

fn confirm(state: &mut AppState) -> Vec<Effect> {
    let follow_up = match state.ui.focused_pane {
        FocusedPane::Predefined => PREDEFINED_QUERIES
            .get(state.ui.predefined_selected)
            .map(|q| Action::SelectPredefined(q.id.to_string())),
        FocusedPane::Schema => {
            let rows = state.schema_rows();
            rows.get(state.ui.schema_selected)
                .map(|row| Action::InsertAtCursor {
                    item: row.insert_text().to_string(),
                    cursor: state.session.editor_cursor(),
                })
        }
        FocusedPane::History => state
            .session
            .history()
            .get(state.ui.history_selected)
            .map(|entry| Action::SelectHistory(entry.query.clone())),
        FocusedPane::Saved => state
            .session
            .saved()
            .get(state.ui.saved_selected)
            .map(|saved| Action::LoadQuery(saved.id.clone())),
        FocusedPane::Editor => Some(Action::EnterEditing),
        FocusedPane::Results => Some(Action::SortHighlighted),
    };
    follow_up
        .map(|action| vec![Effect::DispatchActions(vec![action])])
        .unwrap_or_default()
}

/// Handles focus changes, list movement, confirmation and mode exits.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::FocusNext => {
            state.ui.focused_pane = state.ui.focused_pane.next();
            Some(vec![])
        }
        Action::FocusPrev => {
            state.ui.focused_pane = state.ui.focused_pane.prev();
            Some(vec![])
        }
        Action::FocusPane(pane) => {
            state.ui.focused_pane = *pane;
            Some(vec![])
        }
        Action::SelectNext => Some(select(state, 1)),
        Action::SelectPrevious => Some(select(state, -1)),
        Action::SelectFirst => Some(select_edge(state, false)),
        Action::SelectLast => Some(select_edge(state, true)),
        Action::ConfirmSelection => Some(confirm(state)),
        Action::ToggleSchemaExpand => {
            let rows = state.schema_rows();
            let Some(index) = rows.get(state.ui.schema_selected).map(|r| r.table_index()) else {
                return Some(vec![]);
            };
            state.ui.toggle_schema_table(index);
            // Keep the cursor on the table line after its columns fold away.
            let rows = state.schema_rows();
            if let Some(position) = rows
                .iter()
                .position(|r| matches!(r, SchemaRow::Table { index: i, .. } if *i == index))
            {
                state.ui.schema_selected = position;
            }
            Some(vec![])
        }
        Action::OpenHelp => {
            state.ui.input_mode = InputMode::Help;
            state.ui.help_scroll_offset = 0;
            Some(vec![])
        }
        Action::CloseHelp => {
            if state.ui.input_mode == InputMode::Help {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::Escape => {
            match state.ui.input_mode {
                InputMode::SavePrompt => {
                    state.ui.save_prompt.reset();
                    state.ui.input_mode = InputMode::Normal;
                }
                InputMode::Editing | InputMode::Search | InputMode::Help => {
                    state.ui.input_mode = InputMode::Normal;
                }
                InputMode::Normal => {}
            }
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use rstest::rstest;

    use super::*;
    use crate::domain::SchemaTable;
    use crate::pagination::DEFAULT_PAGE_SIZE;
    use crate::ports::ExecutionOutcome;
    use crate::session::{RunStart, SessionState};

    fn dispatched(effects: &[Effect]) -> Vec<Action> {
        effects
            .iter()
            .flat_map(|e| match e {
                Effect::DispatchActions(actions) => actions.clone(),
                _ => vec![],
            })
            .collect()
    }

    fn with_schema() -> AppState {
        AppState::new(
            SessionState::default(),
            vec![
                SchemaTable::new("Employees", &[("EmployeeID", "VARCHAR"), ("Salary", "NUMERIC")]),
                SchemaTable::new("Orders", &[("OrderID", "VARCHAR")]),
            ],
            DEFAULT_PAGE_SIZE,
        )
    }

    mod focus {
        use super::*;

        #[test]
        fn focus_next_cycles_panes() {
            let mut state = AppState::default();

            reduce_navigation(&mut state, &Action::FocusNext, Instant::now());

            assert_eq!(state.ui.focused_pane, FocusedPane::Results);
        }

        #[test]
        fn focus_pane_sets_directly() {
            let mut state = AppState::default();

            reduce_navigation(
                &mut state,
                &Action::FocusPane(FocusedPane::Saved),
                Instant::now(),
            );

            assert_eq!(state.ui.focused_pane, FocusedPane::Saved);
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn predefined_selection_stops_at_last_item() {
            let mut state = AppState::default();
            state.ui.focused_pane = FocusedPane::Predefined;

            for _ in 0..10 {
                reduce_navigation(&mut state, &Action::SelectNext, Instant::now());
            }

            assert_eq!(state.ui.predefined_selected, PREDEFINED_QUERIES.len() - 1);
        }

        #[test]
        fn select_last_then_first_in_history() {
            let mut state = AppState::default();
            state.ui.focused_pane = FocusedPane::History;
            let mut session = SessionState::default();
            for query in ["a", "b", "c"] {
                session.set_query_input(query);
                if let RunStart::Started { generation, .. } = session.begin_run() {
                    session.complete_run(generation, ExecutionOutcome::Empty, Local::now());
                }
            }
            state.session = session;

            reduce_navigation(&mut state, &Action::SelectLast, Instant::now());
            assert_eq!(state.ui.history_selected, 2);
            reduce_navigation(&mut state, &Action::SelectFirst, Instant::now());
            assert_eq!(state.ui.history_selected, 0);
        }

        #[test]
        fn editing_mode_ignores_list_moves() {
            let mut state = AppState::default();
            state.ui.focused_pane = FocusedPane::Predefined;
            state.ui.input_mode = InputMode::Editing;

            reduce_navigation(&mut state, &Action::SelectNext, Instant::now());

            assert_eq!(state.ui.predefined_selected, 0);
        }

        #[test]
        fn help_mode_scrolls_help() {
            let mut state = AppState::default();
            reduce_navigation(&mut state, &Action::OpenHelp, Instant::now());

            reduce_navigation(&mut state, &Action::SelectNext, Instant::now());
            reduce_navigation(&mut state, &Action::SelectNext, Instant::now());
            reduce_navigation(&mut state, &Action::SelectPrevious, Instant::now());

            assert_eq!(state.ui.help_scroll_offset, 1);
        }
    }

    mod confirm {
        use super::*;

        #[test]
        fn predefined_dispatches_select_predefined() {
            let mut state = AppState::default();
            state.ui.focused_pane = FocusedPane::Predefined;
            state.ui.predefined_selected = 2;

            let effects =
                reduce_navigation(&mut state, &Action::ConfirmSelection, Instant::now()).unwrap();

            assert_eq!(
                dispatched(&effects),
                vec![Action::SelectPredefined("orders".to_string())]
            );
        }

        #[test]
        fn schema_dispatches_insert_at_editor_cursor() {
            let mut state = with_schema();
            state.session.set_query_input("SELECT * FROM ");
            state.ui.focused_pane = FocusedPane::Schema;
            state.ui.schema_selected = 1;

            let effects =
                reduce_navigation(&mut state, &Action::ConfirmSelection, Instant::now()).unwrap();

            assert_eq!(
                dispatched(&effects),
                vec![Action::InsertAtCursor {
                    item: "Orders".to_string(),
                    cursor: Some(14),
                }]
            );
        }

        #[test]
        fn empty_saved_list_dispatches_nothing() {
            let mut state = AppState::default();
            state.ui.focused_pane = FocusedPane::Saved;

            let effects =
                reduce_navigation(&mut state, &Action::ConfirmSelection, Instant::now()).unwrap();

            assert!(effects.is_empty());
        }

        #[rstest]
        #[case(FocusedPane::Editor, Action::EnterEditing)]
        #[case(FocusedPane::Results, Action::SortHighlighted)]
        fn non_list_panes_dispatch_their_action(
            #[case] pane: FocusedPane,
            #[case] expected: Action,
        ) {
            let mut state = AppState::default();
            state.ui.focused_pane = pane;

            let effects =
                reduce_navigation(&mut state, &Action::ConfirmSelection, Instant::now()).unwrap();

            assert_eq!(dispatched(&effects), vec![expected]);
        }
    }

    #[test]
    fn toggle_schema_expand_reveals_columns() {
        let mut state = with_schema();
        state.ui.focused_pane = FocusedPane::Schema;

        reduce_navigation(&mut state, &Action::ToggleSchemaExpand, Instant::now());
        assert_eq!(state.schema_rows().len(), 4);

        state.ui.schema_selected = 2;
        reduce_navigation(&mut state, &Action::ToggleSchemaExpand, Instant::now());
        assert_eq!(state.schema_rows().len(), 2);
        assert_eq!(state.ui.schema_selected, 0);
    }

    #[rstest]
    #[case(InputMode::Editing)]
    #[case(InputMode::Search)]
    #[case(InputMode::Help)]
    fn escape_returns_to_normal(#[case] mode: InputMode) {
        let mut state = AppState::default();
        state.ui.input_mode = mode;

        reduce_navigation(&mut state, &Action::Escape, Instant::now());

        assert_eq!(state.ui.input_mode, InputMode::Normal);
    }

    #[test]
    fn escape_from_save_prompt_discards_name() {
        let mut state = AppState::default();
        state.ui.input_mode = InputMode::SavePrompt;
        state.ui.save_prompt.name = "Draft".to_string();

        reduce_navigation(&mut state, &Action::Escape, Instant::now());

        assert_eq!(state.ui.input_mode, InputMode::Normal);
        assert!(state.ui.save_prompt.name.is_empty());
    }
}
