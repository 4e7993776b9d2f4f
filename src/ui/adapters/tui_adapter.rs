use std::time::Instant;

use color_eyre::eyre::Result;

use crate::app::ports::{RenderOutput, Renderer};
use crate::app::state::AppState;
use crate::components::layout::MainLayout;
use crate::tui::TuiRunner;

/// Draws `AppState` into the real terminal.
pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &mut AppState) -> Result<RenderOutput> {
        let now = Instant::now();
        let mut output = RenderOutput::default();
        self.tui.terminal().draw(|frame| {
            output = MainLayout::render(frame, state, now);
        })?;
        Ok(output)
    }
}
