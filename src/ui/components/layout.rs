use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::editor::Editor;
use super::footer::Footer;
use super::help_overlay::HelpOverlay;
use super::history::HistoryPane;
use super::predefined::PredefinedPane;
use super::result::ResultPane;
use super::save_modal::SaveModal;
use super::saved::SavedPane;
use super::schema_viewer::SchemaViewer;
use crate::app::input_mode::InputMode;
use crate::app::ports::RenderOutput;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState, now: Instant) -> RenderOutput {
        let area = frame.area();

        let [main_area, footer_area] =
            Layout::vertical([Constraint::Min(10), Constraint::Length(1)]).areas(area);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(main_area);

        let [predefined_area, schema_area, history_area, saved_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(left_area);

        PredefinedPane::render(frame, predefined_area, state);
        SchemaViewer::render(frame, schema_area, state);
        HistoryPane::render(frame, history_area, state);
        SavedPane::render(frame, saved_area, state);

        let [editor_area, result_area] =
            Layout::vertical([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(right_area);

        Editor::render(frame, editor_area, state);
        let result_viewport = ResultPane::render(frame, result_area, state, now);

        Footer::render(frame, footer_area, state);

        // Overlays go on top of everything else
        match state.ui.input_mode {
            InputMode::SavePrompt => SaveModal::render(frame, state),
            InputMode::Help => HelpOverlay::render(frame, state),
            _ => {}
        }

        RenderOutput { result_viewport }
    }
}
