use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;

/// Creates a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Dims everything already drawn so the modal stands out.
pub fn render_scrim(frame: &mut Frame) {
    let area = frame.area();
    frame
        .buffer_mut()
        .set_style(area, Style::default().fg(Theme::TEXT_MUTED).bg(Theme::SCRIM));
}

/// Modal border with the title on top and a key hint on the bottom edge.
pub fn modal_block_with_hint(title: &str, hint: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_bottom(Line::from(format!(" {hint} ")).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::MODAL_BORDER))
        .style(Style::default().bg(Theme::MODAL_BG))
}
