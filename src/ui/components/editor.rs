use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use super::list_pane::pane_title;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::theme::Theme;

const PLACEHOLDER: &str = " Enter SQL query...";

pub struct Editor;

impl Editor {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let session = &state.session;
        let focused = state.ui.focused_pane == FocusedPane::Editor;
        let editing = state.ui.input_mode == InputMode::Editing && !session.is_loading();

        let mut title = pane_title(FocusedPane::Editor, 5, None);
        if session.is_loading() {
            title.push_str("· running ");
        } else if editing {
            title.push_str("· editing ");
        }
        let block = panel_block(&title, focused || editing);
        let inner = block.inner(area);

        let (cursor_row, cursor_col) = session.cursor_row_col();
        let lines = Self::build_lines(session.query(), editing.then_some((cursor_row, cursor_col)));

        // Keep the cursor row on screen.
        let height = inner.height.max(1) as usize;
        let scroll = if editing {
            cursor_row.saturating_sub(height - 1)
        } else {
            0
        };

        let style = if session.is_loading() {
            Style::default().fg(Theme::TEXT_MUTED)
        } else {
            Style::default()
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(style)
            .scroll((scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn build_lines(content: &str, cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
        let current_line_style = Style::default().bg(Theme::EDITOR_CURRENT_LINE_BG);

        if content.is_empty() {
            let mut spans = Vec::new();
            if cursor.is_some() {
                spans.push(Span::styled("█", Style::default().fg(Theme::TEXT_ACCENT)));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Theme::TEXT_MUTED),
            ));
            return vec![Line::from(spans)];
        }

        // `split('\n')` keeps the empty last line after a trailing newline.
        content
            .split('\n')
            .enumerate()
            .map(|(row, line)| match cursor {
                Some((cursor_row, cursor_col)) if row == cursor_row => {
                    Self::line_with_cursor(line, cursor_col).style(current_line_style)
                }
                _ => Line::from(line.to_string()),
            })
            .collect()
    }

    fn line_with_cursor(line: &str, cursor_col: usize) -> Line<'static> {
        let chars: Vec<char> = line.chars().collect();

        if cursor_col >= chars.len() {
            Line::from(vec![
                Span::raw(line.to_string()),
                Span::styled("█", Style::default().fg(Theme::TEXT_ACCENT)),
            ])
        } else {
            let before: String = chars[..cursor_col].iter().collect();
            let cursor_char: String = chars[cursor_col].to_string();
            let after: String = chars[cursor_col + 1..].iter().collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char,
                    Style::default()
                        .bg(Theme::TEXT_ACCENT)
                        .fg(Theme::MODAL_BG)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_content_shows_placeholder() {
        let lines = Editor::build_lines("", None);

        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), PLACEHOLDER);
    }

    #[test]
    fn cursor_is_drawn_on_its_row_only() {
        let lines = Editor::build_lines("SELECT *\nFROM t", Some((1, 2)));

        assert_eq!(text(&lines[0]), "SELECT *");
        assert_eq!(lines[1].spans.len(), 3);
        assert_eq!(lines[1].spans[1].content, "O");
    }

    #[test]
    fn trailing_newline_gets_a_cursor_line() {
        let lines = Editor::build_lines("SELECT 1;\n", Some((1, 0)));

        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[1]), "█");
    }

    #[test]
    fn no_cursor_when_not_editing() {
        let lines = Editor::build_lines("SELECT 1;", None);

        assert_eq!(text(&lines[0]), "SELECT 1;");
        assert!(!text(&lines[0]).contains('█'));
    }
}
