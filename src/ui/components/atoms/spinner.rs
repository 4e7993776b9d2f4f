use std::time::Instant;

use crate::app::render_schedule::spinner_frame;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner glyph for a run that started at `since`.
pub fn spinner_char(since: Option<Instant>, now: Instant) -> &'static str {
    SPINNER_FRAMES[spinner_frame(since, now, SPINNER_FRAMES.len())]
}
