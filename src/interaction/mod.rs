mod manipulator_config;
mod tracker_manipulator;

pub use manipulator_config::{SeriesFilter, TrackerManipulatorConfig};
pub use tracker_manipulator::{TrackerManipulator, nearest_hit};

use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, ScreenVector, SeriesId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    #[default]
    Idle,
    Dragging,
}

/// One touch callback as delivered by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEventArgs {
    pub position: ScreenPoint,
    pub delta_translation: ScreenVector,
    /// Set by the manipulator once it consumed the event.
    pub handled: bool,
}

impl TouchEventArgs {
    #[must_use]
    pub fn at(position: ScreenPoint) -> Self {
        Self {
            position,
            delta_translation: ScreenVector::default(),
            handled: false,
        }
    }

    /// Builds a move event from the current and previous touch point lists.
    ///
    /// The position is the first current touch; the translation is the shift
    /// of the touch centroid. Returns `None` when no touch is down.
    #[must_use]
    pub fn from_touch_points(current: &[ScreenPoint], previous: &[ScreenPoint]) -> Option<Self> {
        let position = *current.first()?;
        let delta_translation = match (centroid(current), centroid(previous)) {
            (Some(now), Some(before)) => now - before,
            _ => ScreenVector::default(),
        };
        Some(Self {
            position,
            delta_translation,
            handled: false,
        })
    }
}

fn centroid(points: &[ScreenPoint]) -> Option<ScreenPoint> {
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), point| (x + point.x, y + point.y));
    Some(ScreenPoint::new(sum_x / count, sum_y / count))
}

/// Per-drag state: gesture mode, locked series and the last two positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchSession {
    mode: GestureMode,
    locked_series: Option<SeriesId>,
    current: Option<ScreenPoint>,
    previous: Option<ScreenPoint>,
}

impl TouchSession {
    #[must_use]
    pub fn mode(self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == GestureMode::Dragging
    }

    #[must_use]
    pub fn locked_series(self) -> Option<SeriesId> {
        self.locked_series
    }

    #[must_use]
    pub fn current(self) -> Option<ScreenPoint> {
        self.current
    }

    #[must_use]
    pub fn previous(self) -> Option<ScreenPoint> {
        self.previous
    }

    /// Starts a drag. The lock survives so that re-selection can report
    /// whether it changed.
    pub fn begin(&mut self, position: ScreenPoint) {
        self.mode = GestureMode::Dragging;
        self.current = Some(position);
        self.previous = None;
    }

    pub fn advance(&mut self, position: ScreenPoint) {
        self.mode = GestureMode::Dragging;
        self.previous = self.current.replace(position);
    }

    /// Returns the previously locked series when the lock changed.
    pub fn lock(&mut self, series: Option<SeriesId>) -> Option<Option<SeriesId>> {
        if self.locked_series == series {
            return None;
        }
        Some(std::mem::replace(&mut self.locked_series, series))
    }

    /// Clears all state; returns the series that was locked, if any.
    pub fn end(&mut self) -> Option<SeriesId> {
        let released = self.locked_series;
        *self = Self::default();
        released
    }
}
