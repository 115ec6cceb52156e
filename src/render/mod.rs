mod null_renderer;
mod primitives;
mod tracker_frame;
mod tracker_overlay;

pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use tracker_frame::{TrackerFrame, TrackerMarks};
pub use tracker_overlay::{TrackerOverlay, TrackerOverlayStyle};

use crate::error::TrackerResult;

/// Contract implemented by any tracker drawing backend.
///
/// Backends receive a materialized `TrackerFrame`, so drawing code never
/// sees series data or gesture state.
pub trait Renderer {
    fn render(&mut self, frame: &TrackerFrame) -> TrackerResult<()>;
}
