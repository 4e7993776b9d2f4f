//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` or `Local::now()` (time arrives as `now` or inside the action)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_navigation, reduce_output, reduce_session, reduce_table};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_session(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_table(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_output(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(w, h) => {
            state.ui.terminal_width = w;
            state.ui.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        _ => vec![],
    }
}
