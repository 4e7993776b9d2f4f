use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::theme::Theme;

/// Creates a styled key chip with background (e.g., for help overlay).
/// Example: ` Esc ` with highlighted background
pub fn key_chip(key: &str) -> Span<'static> {
    Span::styled(
        format!(" {key} "),
        Style::default()
            .bg(Theme::KEY_CHIP_BG)
            .fg(Theme::KEY_CHIP_FG)
            .add_modifier(Modifier::BOLD),
    )
}

/// Key text in the accent color, for footer hints.
pub fn key_text(key: &str) -> Span<'static> {
    Span::styled(key.to_string(), Style::default().fg(Theme::TEXT_ACCENT))
}
