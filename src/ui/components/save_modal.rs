use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::list_pane::first_line;
use super::molecules::render_modal;
use super::status_message::{MessageType, StatusMessage};
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct SaveModal;

impl SaveModal {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let (_, inner) = render_modal(
            frame,
            Constraint::Length(60),
            Constraint::Length(8),
            "Save Query",
            "Enter: Save │ Esc: Cancel",
        );

        let [query_area, _, name_area, error_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let query = first_line(state.session.query());
        frame.render_widget(
            Paragraph::new(Line::styled(
                query.to_string(),
                Style::default().fg(Theme::TEXT_SECONDARY),
            )),
            query_area,
        );

        let prompt = &state.ui.save_prompt;
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Theme::TEXT_ACCENT)),
                Span::raw(prompt.name.clone()),
                Span::styled("█", Style::default().fg(Theme::TEXT_ACCENT)),
            ])),
            name_area,
        );

        if let Some(error) = &prompt.error {
            frame.render_widget(
                Paragraph::new(StatusMessage::render_line(error, MessageType::Error)),
                error_area,
            );
        }
    }
}
