use serde_json::Value;

use crate::core::hit_test::{nearest_on_segment, nearest_sample};
use crate::core::series::{HitTestable, SeriesBase, is_x_monotonic};
use crate::core::{CurveSlot, DataPoint, ScreenPoint, SeriesAxes, TrackerHitResult, WindowHintCache};
use crate::render::Color;

/// Single polyline through ordered samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    base: SeriesBase,
    points: Vec<DataPoint>,
    x_monotonic: bool,
    stroke_color: Color,
    stroke_thickness: f64,
}

impl Default for LineSeries {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        let x_monotonic = is_x_monotonic(&points);
        Self {
            base: SeriesBase::default(),
            points,
            x_monotonic,
            stroke_color: Color::rgb(0.13, 0.4, 0.8),
            stroke_thickness: 2.0,
        }
    }

    /// Hidden, transparent helper line that only exists to be looked up by
    /// hosts (e.g. a midpoint between two area boundaries).
    #[must_use]
    pub fn mid_line(points: Vec<DataPoint>) -> Self {
        let mut series = Self::new(points).with_stroke(Color::TRANSPARENT, 2.0);
        series.base.set_visible(false);
        series
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.base.set_title(title);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: SeriesAxes) -> Self {
        self.base.set_axes(Some(axes));
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.base.set_items(items);
        self
    }

    #[must_use]
    pub fn with_tracker_format(mut self, format: impl Into<String>) -> Self {
        self.base.set_tracker_format(format);
        self
    }

    #[must_use]
    pub fn with_tracker_interpolation(mut self, enabled: bool) -> Self {
        self.base.set_can_tracker_interpolate_points(enabled);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, thickness: f64) -> Self {
        self.stroke_color = color;
        self.stroke_thickness = thickness;
        self
    }

    #[must_use]
    pub fn base(&self) -> &SeriesBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut SeriesBase {
        &mut self.base
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.x_monotonic = is_x_monotonic(&points);
        self.points = points;
    }

    #[must_use]
    pub fn is_x_monotonic(&self) -> bool {
        self.x_monotonic
    }

    /// A line with nothing drawn cannot be followed between samples.
    #[must_use]
    pub fn has_visible_stroke(&self) -> bool {
        !self.stroke_color.is_invisible() && self.stroke_thickness > 0.0
    }

    fn start_index(&self, point: ScreenPoint, hints: &mut WindowHintCache) -> Option<usize> {
        self.base.window_start(
            &self.points,
            self.x_monotonic,
            CurveSlot::Primary,
            point,
            hints,
        )
    }
}

impl HitTestable for LineSeries {
    fn nearest_sample(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        let start = self.start_index(point, hints)?;
        let axes = self.base.axes()?;
        nearest_sample(axes, &self.points, start, point).map(|raw| self.base.finish_hit(raw))
    }

    fn nearest_on_segment(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        if !self.has_visible_stroke() || !self.base.can_tracker_interpolate_points() {
            return None;
        }
        let start = self.start_index(point, hints)?;
        let axes = self.base.axes()?;
        nearest_on_segment(axes, &self.points, start, point).map(|raw| self.base.finish_hit(raw))
    }

    /// Interpolated queries fall back to the nearest sample when no segment
    /// qualifies (e.g. a single valid point), but not when the line cannot be
    /// interpolated at all.
    fn nearest_point(
        &self,
        point: ScreenPoint,
        interpolate: bool,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        if !interpolate {
            return self.nearest_sample(point, hints);
        }
        if !self.has_visible_stroke() || !self.base.can_tracker_interpolate_points() {
            return None;
        }
        self.nearest_on_segment(point, hints)
            .or_else(|| self.nearest_sample(point, hints))
    }
}
