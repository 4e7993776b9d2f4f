//! Result table sub-reducer: search, sort, scrolling and paging.

use std::time::Instant;

use tracing::warn;

use super::page_effects;
use crate::action::Action;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::state::AppState;

pub fn reduce_table(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    let table = &mut state.table;
    match action {
        Action::EnterSearch => {
            if table.is_mounted() {
                state.ui.focused_pane = FocusedPane::Results;
                state.ui.input_mode = InputMode::Search;
            }
            Some(vec![])
        }
        Action::SearchInput(c) => {
            table.push_search_char(*c, now);
            Some(vec![])
        }
        Action::SearchBackspace => {
            table.pop_search_char(now);
            Some(vec![])
        }
        Action::ClearSearch => {
            let request = table.clear_search();
            if state.ui.input_mode == InputMode::Search {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(page_effects(request))
        }
        Action::ApplySearch => Some(page_effects(table.apply_search())),
        Action::SubmitSearch => {
            let request = table.apply_search();
            if state.ui.input_mode == InputMode::Search {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(page_effects(request))
        }
        Action::SortByColumn(index) => Some(page_effects(table.sort_by_column(*index))),
        Action::SortHighlighted => Some(page_effects(table.sort_highlighted())),
        Action::ColumnLeft => {
            table.move_column(-1);
            Some(vec![])
        }
        Action::ColumnRight => {
            table.move_column(1);
            Some(vec![])
        }
        Action::ResultScroll(delta) => Some(page_effects(table.scroll(*delta))),
        Action::ResultScrollTop => {
            table.scroll_to_top();
            Some(vec![])
        }
        Action::ResultScrollBottom => Some(page_effects(table.scroll_to_bottom())),
        Action::ViewportMeasured { width, height } => {
            Some(page_effects(table.measure(*width, *height)))
        }
        Action::PageLoaded { generation, page } => {
            Some(page_effects(table.on_page_loaded(*generation, page.clone())))
        }
        Action::PageFailed { generation } => {
            warn!(generation, "page fetch failed, incremental loading stopped");
            table.on_page_failed(*generation);
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::TabularResult;
    use crate::table_view::{NO_MATCH_MESSAGE, PageRequest};

    fn generated(count: usize) -> Arc<TabularResult> {
        let rows = (0..count)
            .map(|i| vec![format!("ITEM-{:05}", i + 1), format!("Product {}", i + 1)])
            .collect();
        Arc::new(TabularResult::new(vec!["ID".to_string(), "Name".to_string()], rows).unwrap())
    }

    fn request(effects: &[Effect]) -> Option<PageRequest> {
        effects.iter().find_map(|e| match e {
            Effect::FetchPage(request) => Some(request.clone()),
            _ => None,
        })
    }

    /// Feeds page results back through the reducer until no more are asked for.
    fn settle(state: &mut AppState, mut pending: Option<PageRequest>) {
        while let Some(req) = pending {
            let page = req.fetcher.fetch_page(req.page);
            let effects = reduce_table(
                state,
                &Action::PageLoaded {
                    generation: req.generation,
                    page,
                },
                Instant::now(),
            )
            .unwrap();
            pending = request(&effects);
        }
    }

    fn mounted_state(count: usize) -> AppState {
        let mut state = AppState::default();
        reduce_table(
            &mut state,
            &Action::ViewportMeasured {
                width: 80,
                height: 20,
            },
            Instant::now(),
        );
        let first = state.table.mount(generated(count));
        settle(&mut state, Some(first));
        state
    }

    mod search {
        use super::*;

        #[test]
        fn enter_search_requires_a_table() {
            let mut state = AppState::default();

            reduce_table(&mut state, &Action::EnterSearch, Instant::now());

            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn typed_search_applies_on_apply_action() {
            let mut state = mounted_state(300);
            reduce_table(&mut state, &Action::EnterSearch, Instant::now());
            for c in "product 25".chars() {
                reduce_table(&mut state, &Action::SearchInput(c), Instant::now());
            }

            let effects = reduce_table(&mut state, &Action::ApplySearch, Instant::now()).unwrap();
            settle(&mut state, request(&effects));

            // "Product 25" plus "Product 250" through "Product 259"
            assert_eq!(state.table.loaded_len(), 11);
            assert_eq!(state.ui.input_mode, InputMode::Search);
        }

        #[test]
        fn submit_applies_and_leaves_search_mode() {
            let mut state = mounted_state(300);
            reduce_table(&mut state, &Action::EnterSearch, Instant::now());
            reduce_table(&mut state, &Action::SearchInput('7'), Instant::now());

            let effects = reduce_table(&mut state, &Action::SubmitSearch, Instant::now()).unwrap();

            assert!(request(&effects).is_some());
            assert_eq!(state.table.applied_search(), "7");
            assert_eq!(state.table.search_debounce(), None);
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn no_match_shows_search_message() {
            let mut state = mounted_state(10);
            reduce_table(&mut state, &Action::SearchInput('#'), Instant::now());

            let effects = reduce_table(&mut state, &Action::ApplySearch, Instant::now()).unwrap();
            settle(&mut state, request(&effects));

            assert_eq!(state.table.empty_message(), Some(NO_MATCH_MESSAGE));
        }

        #[test]
        fn clear_search_restores_rows_and_leaves_search_mode() {
            let mut state = mounted_state(10);
            state.ui.input_mode = InputMode::Search;
            reduce_table(&mut state, &Action::SearchInput('#'), Instant::now());
            let effects = reduce_table(&mut state, &Action::ApplySearch, Instant::now()).unwrap();
            settle(&mut state, request(&effects));

            let effects = reduce_table(&mut state, &Action::ClearSearch, Instant::now()).unwrap();
            settle(&mut state, request(&effects));

            assert_eq!(state.table.loaded_len(), 10);
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }
    }

    mod paging {
        use super::*;

        #[test]
        fn scrolling_to_bottom_requests_next_page() {
            let mut state = mounted_state(1_000);

            let effects =
                reduce_table(&mut state, &Action::ResultScrollBottom, Instant::now()).unwrap();

            assert_eq!(request(&effects).map(|r| r.page), Some(1));
        }

        #[test]
        fn stale_page_is_dropped() {
            let mut state = mounted_state(1_000);
            let stale = reduce_table(&mut state, &Action::ResultScrollBottom, Instant::now())
                .and_then(|e| request(&e))
                .unwrap();
            reduce_table(&mut state, &Action::SortByColumn(0), Instant::now());

            let page = stale.fetcher.fetch_page(stale.page);
            reduce_table(
                &mut state,
                &Action::PageLoaded {
                    generation: stale.generation,
                    page,
                },
                Instant::now(),
            );

            assert_eq!(state.table.loaded_len(), 0);
        }

        #[test]
        fn failed_page_keeps_buffer() {
            let mut state = mounted_state(1_000);
            let pending = reduce_table(&mut state, &Action::ResultScrollBottom, Instant::now())
                .and_then(|e| request(&e))
                .unwrap();

            reduce_table(
                &mut state,
                &Action::PageFailed {
                    generation: pending.generation,
                },
                Instant::now(),
            );

            assert_eq!(state.table.loaded_len(), 100);
            assert!(!state.table.has_more());
            assert!(!state.table.is_fetching());
        }
    }

    #[test]
    fn sort_highlighted_uses_current_column() {
        let mut state = mounted_state(5);
        reduce_table(&mut state, &Action::ColumnRight, Instant::now());

        let effects = reduce_table(&mut state, &Action::SortHighlighted, Instant::now()).unwrap();
        settle(&mut state, request(&effects));

        assert!(state.table.sort().is_sorted_by("Name"));
    }

    #[test]
    fn unrelated_action_is_not_handled() {
        let mut state = AppState::default();

        assert!(reduce_table(&mut state, &Action::RunQuery, Instant::now()).is_none());
    }
}
