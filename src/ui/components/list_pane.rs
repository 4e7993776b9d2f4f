use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::atoms::panel_block;
use super::scroll_indicator::render_vertical_scroll_indicator;
use crate::app::focused_pane::FocusedPane;
use crate::theme::Theme;

/// Border title such as ` [3] History (4) `.
pub fn pane_title(pane: FocusedPane, number: u8, count: Option<usize>) -> String {
    match count {
        Some(count) => format!(" [{number}] {} ({count}) ", pane.title()),
        None => format!(" [{number}] {} ", pane.title()),
    }
}

/// Bordered list with a `> ` marker on the selected line, or a muted
/// placeholder when `items` is empty.
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    focused: bool,
    items: Vec<ListItem<'static>>,
    selected: usize,
    empty_text: &str,
) {
    let block = panel_block(title, focused);
    let inner = block.inner(area);

    if items.is_empty() {
        let placeholder = Paragraph::new(Line::styled(
            empty_text.to_string(),
            Style::default().fg(Theme::TEXT_MUTED),
        ))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let total = items.len();
    let highlight = if focused {
        Style::default()
            .fg(Theme::LIST_SELECTED_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected.min(total - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);

    render_vertical_scroll_indicator(
        frame,
        inner,
        list_state.offset(),
        inner.height as usize,
        total,
    );
}

/// First line of a query, for one-line previews.
pub fn first_line(query: &str) -> &str {
    query.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SELECT 1;", "SELECT 1;")]
    #[case("\n  SELECT *\nFROM t", "SELECT *")]
    #[case("", "")]
    fn first_line_skips_blank_lines(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(first_line(query), expected);
    }

    #[test]
    fn title_includes_count_when_given() {
        assert_eq!(pane_title(FocusedPane::History, 3, Some(2)), " [3] History (2) ");
        assert_eq!(pane_title(FocusedPane::Schema, 2, None), " [2] Schema ");
    }
}
