use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::Clear;

use crate::components::overlay::{centered_rect, modal_block_with_hint, render_scrim};

/// Draws a centered modal over a dimmed background.
/// Returns (outer_area, inner_area).
pub fn render_modal(
    frame: &mut Frame,
    width: Constraint,
    height: Constraint,
    title: &str,
    hint: &str,
) -> (Rect, Rect) {
    let area = centered_rect(frame.area(), width, height);

    render_scrim(frame);
    frame.render_widget(Clear, area);

    let block = modal_block_with_hint(title, hint);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    (area, inner)
}
