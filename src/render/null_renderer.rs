use crate::core::SeriesId;
use crate::error::TrackerResult;
use crate::render::{Renderer, TrackerFrame};

/// Headless renderer that validates frames and remembers the last tracker.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub hidden_frames: usize,
    pub last_series: Option<SeriesId>,
    pub last_label: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TrackerFrame) -> TrackerResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        if frame.is_hidden() {
            self.hidden_frames += 1;
        }
        self.last_series = frame.marks.as_ref().map(|marks| marks.series);
        self.last_label = frame.label_text().map(str::to_owned);
        Ok(())
    }
}
