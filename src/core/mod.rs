pub mod area_series;
pub mod axis;
pub mod geometry;
pub mod label;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod window_hints;
pub mod windowing;

pub use area_series::AreaSeries;
pub use axis::{Axis, AxisValueFormat, SeriesAxes};
pub use hit_test::{
    PlotContext, RawHit, SeriesTransform, TrackerHitResult, nearest_on_segment, nearest_sample,
};
pub use label::DEFAULT_TRACKER_FORMAT;
pub use line_series::LineSeries;
pub use scale::LinearScale;
pub use series::{HitTestable, Series, SeriesBase, SeriesId, SeriesKind};
pub use types::{DataPoint, PlotRect, ScreenPoint, ScreenVector, Viewport};
pub use window_hints::{CurveSlot, WindowHintCache};
pub use windowing::find_window_start;
