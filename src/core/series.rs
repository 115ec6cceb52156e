use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::axis::{DEFAULT_X_AXIS_TITLE, DEFAULT_Y_AXIS_TITLE};
use crate::core::hit_test::{RawHit, SeriesTransform};
use crate::core::label::{DEFAULT_TRACKER_FORMAT, TrackerLabelArgs, format_tracker_label};
use crate::core::windowing::find_window_start;
use crate::core::{
    AreaSeries, CurveSlot, DataPoint, LineSeries, ScreenPoint, SeriesAxes, TrackerHitResult,
    WindowHintCache,
};

static NEXT_SERIES_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique series identity, used to key window hints and locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SERIES_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Line,
    Area,
}

/// Tracker queries a series answers.
///
/// `nearest_sample` and `nearest_on_segment` are the two raw search modes;
/// `nearest_point` is the per-series policy choosing between them.
pub trait HitTestable {
    fn nearest_sample(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult>;

    fn nearest_on_segment(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult>;

    fn nearest_point(
        &self,
        point: ScreenPoint,
        interpolate: bool,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult>;
}

/// State shared by every series variant.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBase {
    id: SeriesId,
    title: String,
    visible: bool,
    axes: Option<SeriesAxes>,
    items: Vec<Value>,
    tracker_format: String,
    can_tracker_interpolate_points: bool,
}

impl Default for SeriesBase {
    fn default() -> Self {
        Self {
            id: SeriesId::next(),
            title: String::new(),
            visible: true,
            axes: None,
            items: Vec::new(),
            tracker_format: DEFAULT_TRACKER_FORMAT.to_owned(),
            can_tracker_interpolate_points: true,
        }
    }
}

impl SeriesBase {
    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// `None` until the series is attached to axes; every query returns no
    /// hit in that state.
    #[must_use]
    pub fn axes(&self) -> Option<&SeriesAxes> {
        self.axes.as_ref()
    }

    pub fn set_axes(&mut self, axes: Option<SeriesAxes>) {
        self.axes = axes;
    }

    /// Per-sample payloads returned as the hit's item.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Value>) {
        self.items = items;
    }

    #[must_use]
    pub fn tracker_format(&self) -> &str {
        &self.tracker_format
    }

    pub fn set_tracker_format(&mut self, format: impl Into<String>) {
        self.tracker_format = format.into();
    }

    #[must_use]
    pub fn can_tracker_interpolate_points(&self) -> bool {
        self.can_tracker_interpolate_points
    }

    pub fn set_can_tracker_interpolate_points(&mut self, value: bool) {
        self.can_tracker_interpolate_points = value;
    }

    /// Window start for one curve; `Some(0)` for non-monotonic curves and
    /// `None` when the series has no axes.
    pub(crate) fn window_start(
        &self,
        points: &[DataPoint],
        x_monotonic: bool,
        slot: CurveSlot,
        target: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<usize> {
        let axes = self.axes.as_ref()?;
        if !x_monotonic {
            return Some(0);
        }
        let target_x = SeriesTransform::inverse_transform(axes, target)?.x;
        let start = find_window_start(points, |p| p.x, target_x, hints.get(self.id, slot));
        hints.set(self.id, slot, start);
        Some(start)
    }

    /// Attributes a raw hit to this series: item lookup and label text.
    pub(crate) fn finish_hit(&self, raw: RawHit) -> TrackerHitResult {
        let item = self.items.get(raw.item_index()).cloned();
        let hit = TrackerHitResult::new(self.id, raw, item);
        let text = match &self.axes {
            Some(axes) => {
                let x_text = axes.x_axis.format_value(raw.data_point.x);
                let y_text = axes.y_axis.format_value(raw.data_point.y);
                format_tracker_label(
                    &self.tracker_format,
                    &TrackerLabelArgs {
                        series_title: &self.title,
                        x_title: axes.x_axis.title().unwrap_or(DEFAULT_X_AXIS_TITLE),
                        x_value: raw.data_point.x,
                        x_text: &x_text,
                        y_title: axes.y_axis.title().unwrap_or(DEFAULT_Y_AXIS_TITLE),
                        y_value: raw.data_point.y,
                        y_text: &y_text,
                        item: hit.item(),
                    },
                )
            }
            None => String::new(),
        };
        hit.with_text(text)
    }
}

/// `true` when the defined x values never decrease.
#[must_use]
pub fn is_x_monotonic(points: &[DataPoint]) -> bool {
    let mut previous = f64::NEG_INFINITY;
    for point in points {
        if point.x.is_nan() {
            continue;
        }
        if point.x < previous {
            return false;
        }
        previous = point.x;
    }
    true
}

/// Closed set of series variants the tracker understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Area(AreaSeries),
}

impl Series {
    #[must_use]
    pub fn base(&self) -> &SeriesBase {
        match self {
            Self::Line(series) => series.base(),
            Self::Area(series) => series.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut SeriesBase {
        match self {
            Self::Line(series) => series.base_mut(),
            Self::Area(series) => series.base_mut(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.base().id()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.base().title()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Area(_) => SeriesKind::Area,
        }
    }

    fn hit_testable(&self) -> &dyn HitTestable {
        match self {
            Self::Line(series) => series as &dyn HitTestable,
            Self::Area(series) => series as &dyn HitTestable,
        }
    }
}

impl HitTestable for Series {
    fn nearest_sample(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        self.hit_testable().nearest_sample(point, hints)
    }

    fn nearest_on_segment(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        self.hit_testable().nearest_on_segment(point, hints)
    }

    fn nearest_point(
        &self,
        point: ScreenPoint,
        interpolate: bool,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        self.hit_testable().nearest_point(point, interpolate, hints)
    }
}

impl From<LineSeries> for Series {
    fn from(series: LineSeries) -> Self {
        Self::Line(series)
    }
}

impl From<AreaSeries> for Series {
    fn from(series: AreaSeries) -> Self {
        Self::Area(series)
    }
}
