use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::list_pane::{pane_title, render_list_pane};
use crate::app::focused_pane::FocusedPane;
use crate::app::schema_tree::SchemaRow;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct SchemaViewer;

impl SchemaViewer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let items = state
            .schema_rows()
            .iter()
            .map(|row| ListItem::new(Self::row_line(row)))
            .collect();

        render_list_pane(
            frame,
            area,
            &pane_title(FocusedPane::Schema, 2, Some(state.schema.len())),
            state.ui.focused_pane == FocusedPane::Schema,
            items,
            state.ui.schema_selected,
            "No tables",
        );
    }

    fn row_line(row: &SchemaRow<'_>) -> Line<'static> {
        match row {
            SchemaRow::Table { name, expanded, .. } => {
                let marker = if *expanded { "▾ " } else { "▸ " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Theme::TEXT_MUTED)),
                    Span::raw((*name).to_string()),
                ])
            }
            SchemaRow::Column {
                name, data_type, ..
            } => Line::from(vec![
                Span::raw(format!("    {name} ")),
                Span::styled(
                    (*data_type).to_string(),
                    Style::default().fg(Theme::TEXT_MUTED),
                ),
            ]),
        }
    }
}
