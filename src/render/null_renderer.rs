use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests catch invalid geometry without
/// a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.count(|layer| layer.paths.as_slice());
        self.last_line_count = frame.count(|layer| layer.lines.as_slice());
        self.last_circle_count = frame.count(|layer| layer.circles.as_slice());
        self.last_text_count = frame.count(|layer| layer.texts.as_slice());
        Ok(())
    }
}
