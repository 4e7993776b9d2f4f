use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::{chip_hint_line, render_modal};
use super::scroll_indicator::render_vertical_scroll_indicator;
use crate::app::keybindings::{
    EDITOR_KEYS, GLOBAL_KEYS, HELP_KEYS, KeyBinding, LIST_KEYS, RESULT_KEYS, SAVE_PROMPT_KEYS,
    SEARCH_KEYS,
};
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let (_, inner) = render_modal(
            frame,
            Constraint::Percentage(70),
            Constraint::Percentage(80),
            "Help",
            "j/k: Scroll │ Esc/?: Close",
        );

        let lines = Self::lines();
        let total = lines.len();
        let visible = inner.height as usize;
        let max_scroll = total.saturating_sub(visible);
        let scroll = state.ui.help_scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(Theme::MODAL_BG))
            .scroll((scroll as u16, 0));
        frame.render_widget(paragraph, inner);

        render_vertical_scroll_indicator(frame, inner, scroll, visible, total);
    }

    fn lines() -> Vec<Line<'static>> {
        let sections: [(&str, &[KeyBinding]); 7] = [
            ("Global", GLOBAL_KEYS),
            ("Lists (Predefined, Schema, History, Saved)", LIST_KEYS),
            ("Query editor", EDITOR_KEYS),
            ("Results", RESULT_KEYS),
            ("Search", SEARCH_KEYS),
            ("Save prompt", SAVE_PROMPT_KEYS),
            ("Help", HELP_KEYS),
        ];

        let mut lines = Vec::new();
        for (i, (title, keys)) in sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Self::section_title(title));
            lines.extend(keys.iter().map(|k| chip_hint_line(k.key, k.description)));
        }
        lines
    }

    fn section_title(title: &str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title.to_string(),
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD),
        )])
    }
}
