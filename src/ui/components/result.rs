//! Result pane: status messages, or the virtualized table with its search
//! line, header and paging indicator.
//!
//! Only the rows inside the current scroll window are turned into widgets,
//! so a 50k-row result costs the same per frame as a 5-row one.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};

use super::atoms::{panel_block_highlight, spinner_char};
use super::list_pane::pane_title;
use super::scroll_indicator::{column_indicator_line, render_vertical_scroll_indicator};
use super::status_message::StatusMessage;
use super::text_utils::fit_cell;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::table_view::TableView;
use crate::domain::{ResultBody, ResultStatus};
use crate::theme::Theme;

pub const IDLE_TEXT: &str = "Run a query to see results here.";

/// Lines above the body (search, header) and below it (column indicator).
const CHROME_LINES: u16 = 3;

pub struct ResultPane;

impl ResultPane {
    /// Draws the pane. Returns the measured (width, height) of the table
    /// body when a table is shown.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        now: Instant,
    ) -> Option<(u16, u16)> {
        let focused = state.ui.focused_pane == FocusedPane::Results;
        let searching = state.ui.input_mode == InputMode::Search;
        let block = panel_block_highlight(&Self::title(state), focused, searching);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match state.session.result().map(|r| (r.status(), r.body())) {
            None => {
                Self::render_message(frame, inner, IDLE_TEXT, Style::default().fg(Theme::TEXT_MUTED));
                None
            }
            Some((ResultStatus::Loading, ResultBody::Message(text))) => {
                let spinner = spinner_char(state.loading_since, now);
                Self::render_message(
                    frame,
                    inner,
                    &format!("{spinner} {text}"),
                    StatusMessage::status_style(ResultStatus::Loading),
                );
                None
            }
            Some((status, ResultBody::Message(text))) => {
                Self::render_message(frame, inner, text, StatusMessage::status_style(status));
                None
            }
            Some((_, ResultBody::Table(_))) if state.table.is_mounted() => {
                Some(Self::render_table(frame, inner, &state.table, searching))
            }
            Some((_, ResultBody::Table(_))) => None,
        }
    }

    fn title(state: &AppState) -> String {
        let mut title = pane_title(FocusedPane::Results, 6, None);
        if state.table.is_mounted() {
            title.push_str(&format!("· {} rows ", state.table.total_len()));
        }
        title
    }

    fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
        let paragraph = Paragraph::new(Line::styled(text.to_string(), style))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_table(
        frame: &mut Frame,
        area: Rect,
        table: &TableView,
        searching: bool,
    ) -> (u16, u16) {
        let [search_area, header_area, body_area, columns_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let measured = (area.width, area.height.saturating_sub(CHROME_LINES));

        frame.render_widget(
            Paragraph::new(Self::search_line(table, searching)),
            search_area,
        );

        let columns = table.visible_column_range();
        let widths: Vec<u16> = table.column_widths()[columns.clone()].to_vec();

        let header = Self::header_row(table, columns.clone(), &widths);
        frame.render_widget(
            Table::new(vec![header], Self::constraints(&widths)).column_spacing(0),
            header_area,
        );

        if let Some(message) = table.empty_message() {
            Self::render_message(frame, body_area, message, Style::default().fg(Theme::TEXT_MUTED));
        } else {
            let rows = Self::body_rows(table, columns.clone(), &widths);
            frame.render_widget(
                Table::new(rows, Self::constraints(&widths)).column_spacing(0),
                body_area,
            );
            render_vertical_scroll_indicator(
                frame,
                body_area,
                table.scroll_offset(),
                table.visible_rows(),
                table.loaded_len(),
            );
        }

        if let Some(line) = column_indicator_line(columns, table.column_count(), columns_area.width)
        {
            frame.render_widget(Paragraph::new(line).right_aligned(), columns_area);
        }

        measured
    }

    fn constraints(widths: &[u16]) -> Vec<Constraint> {
        widths.iter().map(|w| Constraint::Length(*w)).collect()
    }

    fn search_line(table: &TableView, searching: bool) -> Line<'static> {
        let mut spans = if searching {
            vec![
                Span::styled("/ ", Style::default().fg(Theme::TEXT_ACCENT)),
                Span::raw(table.search_input().to_string()),
                Span::styled("█", Style::default().fg(Theme::TEXT_ACCENT)),
            ]
        } else if table.applied_search().is_empty() {
            vec![Span::styled(
                "/ search",
                Style::default().fg(Theme::TEXT_MUTED),
            )]
        } else {
            vec![
                Span::styled("/ ", Style::default().fg(Theme::TEXT_MUTED)),
                Span::styled(
                    table.applied_search().to_string(),
                    Style::default().fg(Theme::TEXT_ACCENT),
                ),
            ]
        };

        spans.push(Span::styled(
            format!(
                "   Loaded {} of {} rows",
                table.loaded_len(),
                table.total_len()
            ),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
        if table.is_fetching() {
            spans.push(Span::styled(
                " · loading more",
                Style::default().fg(Theme::STATUS_LOADING),
            ));
        } else if table.has_more() {
            spans.push(Span::styled(
                " · scroll for more",
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }
        Line::from(spans)
    }

    fn header_row(
        table: &TableView,
        columns: std::ops::Range<usize>,
        widths: &[u16],
    ) -> Row<'static> {
        let sort = table.sort();
        let cells = columns.zip(widths).map(|(index, width)| {
            let name = &table.headers()[index];
            let label = if sort.is_sorted_by(name) {
                format!("{name} {}", sort.direction.indicator())
            } else {
                name.clone()
            };
            let mut style = Style::default()
                .bg(Theme::TABLE_HEADER_BG)
                .add_modifier(Modifier::BOLD);
            if index == table.highlighted_column() {
                style = style.bg(Theme::COLUMN_HIGHLIGHT_BG).fg(Theme::TEXT_ACCENT);
            }
            Cell::from(Self::padded(&label, *width)).style(style)
        });
        Row::new(cells)
    }

    fn body_rows(
        table: &TableView,
        columns: std::ops::Range<usize>,
        widths: &[u16],
    ) -> Vec<Row<'static>> {
        let visible = table.scroll_offset()..table.scroll_offset() + table.visible_rows();
        table
            .materialized_rows()
            .filter(|(pos, _)| visible.contains(pos))
            .map(|(_, row)| {
                let cells = columns.clone().zip(widths).map(|(index, width)| {
                    let value = row.get(index).map_or("", String::as_str);
                    let cell = Cell::from(Self::padded(value, *width));
                    if index == table.highlighted_column() {
                        cell.style(Style::default().bg(Theme::COLUMN_HIGHLIGHT_BG))
                    } else {
                        cell
                    }
                });
                Row::new(cells)
            })
            .collect()
    }

    /// One leading space of padding, then the text fitted to the rest.
    fn padded(text: &str, width: u16) -> String {
        format!(" {}", fit_cell(text, (width as usize).saturating_sub(1)))
    }
}
