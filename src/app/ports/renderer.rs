use color_eyre::eyre::Result;

use crate::state::AppState;

/// What the renderer measured while drawing a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Inner (width, height) of the result table body, when a table is shown.
    pub result_viewport: Option<(u16, u16)>,
}

pub trait Renderer {
    fn draw(&mut self, state: &mut AppState) -> Result<RenderOutput>;
}
