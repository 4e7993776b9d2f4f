//! When the main loop has to wake up without input: spinner frames, feedback
//! expiry and the search debounce.

use std::time::{Duration, Instant};

use crate::state::AppState;

/// One spinner frame per tick.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Earliest of the pending timed updates, or `None` when the loop can sleep
/// until the next key.
///
/// Sources:
/// - spinner tick while a query runs
/// - feedback message expiry
/// - search debounce
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    if has_active_spinner(state) {
        earliest = min_instant(earliest, Some(now + SPINNER_INTERVAL));
    }

    if let Some(expires_at) = state.feedback.expires_at() {
        earliest = min_instant(earliest, Some(expires_at));
    }

    min_instant(earliest, state.table.search_debounce())
}

/// Spinner frame for a run that started at `since`.
pub fn spinner_frame(since: Option<Instant>, now: Instant, frames: usize) -> usize {
    let Some(since) = since else {
        return 0;
    };
    if frames == 0 {
        return 0;
    }
    let ticks = now.saturating_duration_since(since).as_millis() / SPINNER_INTERVAL.as_millis();
    (ticks % frames as u128) as usize
}

fn has_active_spinner(state: &AppState) -> bool {
    state.session.is_loading()
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
