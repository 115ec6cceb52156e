use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::ScreenPoint;
use crate::error::{TrackerError, TrackerResult};
use crate::interaction::{TouchEventArgs, TrackerManipulator};

use super::{PlotModel, PlotView};

type TouchPoints = SmallVec<[ScreenPoint; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSurfaceConfig {
    /// Device pixels per plot pixel; raw touch coordinates are divided by it.
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,
}

impl Default for PlotSurfaceConfig {
    fn default() -> Self {
        Self {
            display_scale: default_display_scale(),
        }
    }
}

impl PlotSurfaceConfig {
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    pub fn validate(self) -> TrackerResult<Self> {
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(TrackerError::InvalidData(
                "display_scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_display_scale() -> f64 {
    1.0
}

/// Touch-enabled plot: routes raw touch down/move/up lists through the
/// tracker manipulator into the model and view.
#[derive(Debug)]
pub struct PlotSurface<V: PlotView> {
    model: Option<PlotModel>,
    view: V,
    manipulator: TrackerManipulator,
    config: PlotSurfaceConfig,
    previous_touch_points: TouchPoints,
}

impl<V: PlotView> PlotSurface<V> {
    pub fn new(view: V, config: PlotSurfaceConfig) -> TrackerResult<Self> {
        Ok(Self {
            model: None,
            view,
            manipulator: TrackerManipulator::default(),
            config: config.validate()?,
            previous_touch_points: TouchPoints::new(),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: PlotModel) -> Self {
        self.model = Some(model);
        self
    }

    #[must_use]
    pub fn with_manipulator(mut self, manipulator: TrackerManipulator) -> Self {
        self.manipulator = manipulator;
        self
    }

    /// Replaces the model and returns the previous one.
    pub fn set_model(&mut self, model: Option<PlotModel>) -> Option<PlotModel> {
        std::mem::replace(&mut self.model, model)
    }

    #[must_use]
    pub fn model(&self) -> Option<&PlotModel> {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> Option<&mut PlotModel> {
        self.model.as_mut()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn manipulator(&self) -> &TrackerManipulator {
        &self.manipulator
    }

    pub fn manipulator_mut(&mut self) -> &mut TrackerManipulator {
        &mut self.manipulator
    }

    #[must_use]
    pub fn config(&self) -> PlotSurfaceConfig {
        self.config
    }

    /// Scaled touch points of the last down/move event.
    #[must_use]
    pub fn previous_touch_points(&self) -> &[ScreenPoint] {
        &self.previous_touch_points
    }

    /// Returns `true` when the event was handled.
    pub fn touch_down(&mut self, raw_points: &[ScreenPoint]) -> bool {
        let points = self.scale(raw_points);
        let Some(mut args) = TouchEventArgs::from_touch_points(&points, &[]) else {
            return false;
        };
        trace!(x = args.position.x, y = args.position.y, "touch down");
        self.manipulator
            .started(self.model.as_mut(), &mut self.view, &mut args);
        self.previous_touch_points = points;
        args.handled
    }

    pub fn touch_move(&mut self, raw_points: &[ScreenPoint]) -> bool {
        let points = self.scale(raw_points);
        let Some(mut args) =
            TouchEventArgs::from_touch_points(&points, &self.previous_touch_points)
        else {
            return false;
        };
        self.manipulator
            .delta(self.model.as_mut(), &mut self.view, &mut args);
        self.previous_touch_points = points;
        args.handled
    }

    /// Up events may carry no points; the last known position is used then.
    pub fn touch_up(&mut self, raw_points: &[ScreenPoint]) -> bool {
        let points = self.scale(raw_points);
        let current: &[ScreenPoint] = if points.is_empty() {
            &self.previous_touch_points
        } else {
            &points
        };
        let mut args = TouchEventArgs::from_touch_points(current, &self.previous_touch_points)
            .unwrap_or_else(|| TouchEventArgs::at(ScreenPoint::default()));
        trace!(x = args.position.x, y = args.position.y, "touch up");
        self.manipulator
            .completed(self.model.as_mut(), &mut self.view, &mut args);
        self.previous_touch_points.clear();
        args.handled
    }

    fn scale(&self, raw_points: &[ScreenPoint]) -> TouchPoints {
        let scale = self.config.display_scale;
        raw_points
            .iter()
            .map(|point| ScreenPoint::new(point.x / scale, point.y / scale))
            .collect()
    }
}
