use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Column position line for the result table: `< col X-Y/Z ──█── >`.
/// Returns `None` when every column already fits.
pub fn column_indicator_line(
    columns: std::ops::Range<usize>,
    total: usize,
    width: u16,
) -> Option<Line<'static>> {
    let can_scroll_left = columns.start > 0;
    let can_scroll_right = columns.end < total;
    if total <= 1 || (!can_scroll_left && !can_scroll_right) {
        return None;
    }

    let position_text = format!("col {}-{}/{}", columns.start + 1, columns.end, total);
    // "<" + spaces around text + " >"
    let fixed_parts_len = 1 + 1 + position_text.len() + 1 + 2;
    let track_width = (width as usize).saturating_sub(fixed_parts_len).clamp(5, 30);
    let track = build_scrollbar_track(columns.start, total, track_width);

    let active = Style::default().fg(Theme::TEXT_ACCENT);
    let inactive = Style::default().fg(Theme::TEXT_MUTED);
    Some(Line::from(vec![
        Span::styled("<", if can_scroll_left { active } else { inactive }),
        Span::styled(format!(" {position_text} "), active),
        Span::styled(track, active),
        Span::styled(" >", if can_scroll_right { active } else { inactive }),
    ]))
}

fn build_scrollbar_track(position: usize, total: usize, width: usize) -> String {
    if total <= 1 || width < 3 {
        return "─".repeat(width);
    }

    let thumb_size = if width >= 10 { 2 } else { 1 };
    let thumb_pos = (position * (width - thumb_size)) / total.max(1);

    (0..width)
        .map(|i| {
            if i >= thumb_pos && i < thumb_pos + thumb_size {
                '█'
            } else {
                '─'
            }
        })
        .collect()
}

/// Render a row range indicator `[a-b/total]` at the bottom-right of an area.
/// NOTE: `area` should be the INNER area (without border).
pub fn render_vertical_scroll_indicator(
    frame: &mut Frame,
    area: Rect,
    current_start: usize,
    visible_count: usize,
    total: usize,
) {
    if total <= visible_count {
        return;
    }

    let current_end = (current_start + visible_count).min(total);
    let indicator = format!("[{}-{}/{}]", current_start + 1, current_end, total);
    let width = (indicator.len() as u16).min(area.width);

    let indicator_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(1),
        width,
        height: 1,
    };

    frame.render_widget(
        Paragraph::new(indicator).style(Style::default().fg(Theme::TEXT_MUTED)),
        indicator_area,
    );
}
