use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use super::status_message::{MessageType, StatusMessage};
use crate::app::feedback::{Feedback, FeedbackKind};
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{
    EDITOR_KEYS, GLOBAL_KEYS, HELP_KEYS, LIST_KEYS, RESULT_KEYS, SAVE_PROMPT_KEYS, SEARCH_KEYS,
    idx,
};
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.feedback.current() {
            Some(Feedback {
                kind: FeedbackKind::Error,
                text,
                ..
            }) => StatusMessage::render_line(text, MessageType::Error),
            Some(Feedback {
                kind: FeedbackKind::Success,
                text,
                ..
            }) => Self::with_success(text, Self::hints(state)),
            None => hint_line(&Self::hints(state)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn with_success(message: &str, hints: Vec<(&str, &str)>) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("✓ {message}  "),
            Style::default().fg(Theme::STATUS_SUCCESS),
        )];
        spans.extend(hint_line(&hints).spans);
        Line::from(spans)
    }

    /// Hint ordering: Actions → Navigation → Help → Close/Cancel → Quit
    fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui.input_mode {
            InputMode::Normal => {
                let mut list = vec![
                    GLOBAL_KEYS[idx::global::RUN].as_hint(),
                    GLOBAL_KEYS[idx::global::SAVE].as_hint(),
                    GLOBAL_KEYS[idx::global::CLEAR].as_hint(),
                ];
                match state.ui.focused_pane {
                    FocusedPane::Editor => list.push(GLOBAL_KEYS[idx::global::EDIT].as_hint()),
                    FocusedPane::Results => {
                        list.push(RESULT_KEYS[idx::result::SEARCH].as_hint());
                        list.push(RESULT_KEYS[idx::result::SORT].as_hint());
                        list.push(RESULT_KEYS[idx::result::COPY].as_hint());
                        list.push(RESULT_KEYS[idx::result::EXPORT].as_hint());
                        list.push(RESULT_KEYS[idx::result::SCROLL].as_hint());
                        list.push(RESULT_KEYS[idx::result::COLUMN].as_hint());
                    }
                    pane => {
                        list.push(LIST_KEYS[idx::list::SELECT].as_hint());
                        if pane == FocusedPane::Schema {
                            list.push(LIST_KEYS[idx::list::EXPAND].as_hint());
                        }
                        if pane == FocusedPane::Saved {
                            list.push(LIST_KEYS[idx::list::DELETE].as_hint());
                        }
                        list.push(LIST_KEYS[idx::list::NAVIGATE].as_hint());
                    }
                }
                list.push(GLOBAL_KEYS[idx::global::PANE_SWITCH].as_hint());
                list.push(GLOBAL_KEYS[idx::global::HELP].as_hint());
                list.push(GLOBAL_KEYS[idx::global::QUIT].as_hint());
                list
            }
            InputMode::Editing => vec![
                EDITOR_KEYS[idx::editor::RUN].as_hint(),
                EDITOR_KEYS[idx::editor::NEWLINE].as_hint(),
                EDITOR_KEYS[idx::editor::MOVE].as_hint(),
                EDITOR_KEYS[idx::editor::ESC_DONE].as_hint(),
            ],
            InputMode::Search => vec![
                SEARCH_KEYS[idx::search::APPLY].as_hint(),
                SEARCH_KEYS[idx::search::ESC_CLEAR].as_hint(),
            ],
            InputMode::SavePrompt => vec![
                SAVE_PROMPT_KEYS[idx::save_prompt::SAVE].as_hint(),
                SAVE_PROMPT_KEYS[idx::save_prompt::ESC_CANCEL].as_hint(),
            ],
            InputMode::Help => vec![
                HELP_KEYS[idx::help::SCROLL].as_hint(),
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FocusedPane::Results, "Copy")]
    #[case(FocusedPane::Saved, "Delete")]
    #[case(FocusedPane::Schema, "Expand")]
    #[case(FocusedPane::Editor, "Edit")]
    fn normal_hints_follow_focused_pane(#[case] pane: FocusedPane, #[case] expected: &str) {
        let mut state = AppState::default();
        state.ui.focused_pane = pane;

        let hints = Footer::hints(&state);

        assert!(hints.iter().any(|(_, desc)| *desc == expected));
    }

    #[test]
    fn search_mode_shows_apply_and_clear() {
        let mut state = AppState::default();
        state.ui.input_mode = InputMode::Search;

        let hints = Footer::hints(&state);

        assert_eq!(hints, vec![("Enter", "Apply"), ("Esc", "Clear")]);
    }
}
