use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::list_pane::{first_line, pane_title, render_list_pane};
use crate::app::focused_pane::FocusedPane;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct SavedPane;

impl SavedPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let saved = state.session.saved();
        let items = saved
            .iter()
            .map(|query| {
                ListItem::new(Line::from(vec![
                    Span::styled(query.name.clone(), Style::default().fg(Theme::TEXT_ACCENT)),
                    Span::styled(
                        format!("  {}", first_line(&query.query)),
                        Style::default().fg(Theme::TEXT_SECONDARY),
                    ),
                ]))
            })
            .collect();

        render_list_pane(
            frame,
            area,
            &pane_title(FocusedPane::Saved, 4, Some(saved.len())),
            state.ui.focused_pane == FocusedPane::Saved,
            items,
            state.ui.saved_selected,
            "No saved queries (Ctrl+S to save)",
        );
    }
}
