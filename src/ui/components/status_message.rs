use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::domain::ResultStatus;
use crate::theme::Theme;

pub enum MessageType {
    Error,
    Success,
}

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &str, msg_type: MessageType) -> Line<'static> {
        let color = match msg_type {
            MessageType::Error => Theme::STATUS_ERROR,
            MessageType::Success => Theme::STATUS_SUCCESS,
        };

        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )])
    }

    pub fn status_style(status: ResultStatus) -> Style {
        let color = match status {
            ResultStatus::Success => Theme::STATUS_SUCCESS,
            ResultStatus::Loading => Theme::STATUS_LOADING,
            ResultStatus::Error => Theme::STATUS_ERROR,
            ResultStatus::Warning => Theme::STATUS_WARNING,
        };
        Style::default().fg(color)
    }
}
