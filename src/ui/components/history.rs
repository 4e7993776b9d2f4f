use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::list_pane::{first_line, pane_title, render_list_pane};
use crate::app::focused_pane::FocusedPane;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct HistoryPane;

impl HistoryPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let history = state.session.history();
        let items = history
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.timestamp.format("%H:%M:%S ").to_string(),
                        Style::default().fg(Theme::TEXT_MUTED),
                    ),
                    Span::raw(first_line(&entry.query).to_string()),
                ]))
            })
            .collect();

        render_list_pane(
            frame,
            area,
            &pane_title(FocusedPane::History, 3, Some(history.len())),
            state.ui.focused_pane == FocusedPane::History,
            items,
            state.ui.history_selected,
            "No queries run yet",
        );
    }
}
