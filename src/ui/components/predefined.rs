use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::ListItem;

use super::list_pane::{pane_title, render_list_pane};
use crate::app::focused_pane::FocusedPane;
use crate::app::state::AppState;
use crate::domain::PREDEFINED_QUERIES;

pub struct PredefinedPane;

impl PredefinedPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let items = PREDEFINED_QUERIES
            .iter()
            .map(|q| ListItem::new(q.query))
            .collect();

        render_list_pane(
            frame,
            area,
            &pane_title(FocusedPane::Predefined, 1, None),
            state.ui.focused_pane == FocusedPane::Predefined,
            items,
            state.ui.predefined_selected,
            "No predefined queries",
        );
    }
}
