use std::fmt;

use tracing::{debug, trace};

use crate::api::{PlotModel, PlotView};
use crate::core::{HitTestable, ScreenPoint, Series, SeriesId, TrackerHitResult, WindowHintCache};
use crate::error::TrackerResult;
use crate::extensions::TrackerEvent;
use crate::interaction::{GestureMode, TouchEventArgs, TouchSession, TrackerManipulatorConfig};

type SeriesPredicate = Box<dyn Fn(&Series) -> bool + Send + Sync>;

/// Touch-drag tracker state machine (`Idle → Dragging → Idle`).
///
/// Each callback runs to completion against the model and view it is given
/// and marks the event handled. The manipulator owns the window hints of
/// every series it has queried.
pub struct TrackerManipulator {
    config: TrackerManipulatorConfig,
    series_predicate: Option<SeriesPredicate>,
    session: TouchSession,
    hints: WindowHintCache,
}

impl Default for TrackerManipulator {
    fn default() -> Self {
        Self {
            config: TrackerManipulatorConfig::default(),
            series_predicate: None,
            session: TouchSession::default(),
            hints: WindowHintCache::new(),
        }
    }
}

impl fmt::Debug for TrackerManipulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerManipulator")
            .field("config", &self.config)
            .field("has_series_predicate", &self.series_predicate.is_some())
            .field("session", &self.session)
            .field("hints", &self.hints.len())
            .finish()
    }
}

impl TrackerManipulator {
    pub fn new(config: TrackerManipulatorConfig) -> TrackerResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    /// Extra selection predicate, applied on top of the config's series filter.
    #[must_use]
    pub fn with_series_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Series) -> bool + Send + Sync + 'static,
    {
        self.series_predicate = Some(Box::new(predicate));
        self
    }

    #[must_use]
    pub fn config(&self) -> TrackerManipulatorConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TrackerManipulatorConfig) -> TrackerResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.session.mode()
    }

    #[must_use]
    pub fn session(&self) -> TouchSession {
        self.session
    }

    #[must_use]
    pub fn locked_series(&self) -> Option<SeriesId> {
        self.session.locked_series()
    }

    #[must_use]
    pub fn window_hints(&self) -> &WindowHintCache {
        &self.hints
    }

    /// Drops the window hints of a series whose samples were replaced.
    pub fn forget_series(&mut self, series_id: SeriesId) {
        self.hints.forget(series_id);
    }

    pub fn started(
        &mut self,
        model: Option<&mut PlotModel>,
        view: &mut dyn PlotView,
        args: &mut TouchEventArgs,
    ) {
        self.session.begin(args.position);
        self.update_tracker(model, view, args.position, true);
        args.handled = true;
    }

    pub fn delta(
        &mut self,
        model: Option<&mut PlotModel>,
        view: &mut dyn PlotView,
        args: &mut TouchEventArgs,
    ) {
        self.session.advance(args.position);
        self.update_tracker(model, view, args.position, false);
        args.handled = true;
    }

    pub fn completed(
        &mut self,
        model: Option<&mut PlotModel>,
        view: &mut dyn PlotView,
        args: &mut TouchEventArgs,
    ) {
        let released = self.session.end();
        view.hide_tracker();
        if let Some(model) = model {
            if let Some(series) = released {
                model.emit_tracker_event(&TrackerEvent::SeriesReleased { series });
            }
            model.raise_tracker_changed(None);
        }
        args.handled = true;
    }

    fn update_tracker(
        &mut self,
        model: Option<&mut PlotModel>,
        view: &mut dyn PlotView,
        position: ScreenPoint,
        force_select: bool,
    ) {
        let Some(model) = model else {
            if !self.config.lock_to_initial_series {
                view.hide_tracker();
            }
            return;
        };

        let inside = model.plot_area().contains(position);
        if !inside && !force_select {
            trace!(x = position.x, y = position.y, "touch outside plot area");
            return;
        }

        let locked_is_live = self
            .session
            .locked_series()
            .is_some_and(|id| model.series_by_id(id).is_some());
        if force_select || !self.config.lock_to_initial_series || !locked_is_live {
            let selected = self.select_series(model, position);
            self.lock_series(model, selected);
        }

        let Some(series_id) = self.session.locked_series() else {
            if !self.config.lock_to_initial_series {
                view.hide_tracker();
            }
            return;
        };

        if !inside {
            trace!(x = position.x, y = position.y, "touch outside plot area");
            return;
        }

        let Some(series) = model.series_by_id(series_id) else {
            return;
        };
        let Some(hit) = nearest_hit(series, position, &self.config, &mut self.hints) else {
            trace!(series = series_id.get(), "no tracker hit");
            return;
        };

        let hit = hit.with_plot_context(model.plot_context());
        view.show_tracker(&hit);
        model.raise_tracker_changed(Some(&hit));
    }

    fn select_series(&mut self, model: &PlotModel, position: ScreenPoint) -> Option<SeriesId> {
        let filter = self.config.series_filter;
        let custom = self.series_predicate.as_deref();
        model.series_from_point(
            position,
            |series| filter.accepts(series) && custom.is_none_or(|predicate| predicate(series)),
            !self.config.points_only,
            self.config.fires_distance,
            &mut self.hints,
        )
    }

    fn lock_series(&mut self, model: &mut PlotModel, selected: Option<SeriesId>) {
        let Some(previous) = self.session.lock(selected) else {
            return;
        };
        if let Some(series) = previous {
            model.emit_tracker_event(&TrackerEvent::SeriesReleased { series });
        }
        if let Some(series) = selected {
            debug!(series = series.get(), "tracker locked series");
            model.emit_tracker_event(&TrackerEvent::SeriesLocked { series });
        }
    }
}

/// Hit on one series under the manipulator's snapping policy.
///
/// - `points_only`: nearest sample; with `check_distance_between_points` it
///   must lie closer than `fires_distance`.
/// - `snap`: nearest sample when closer than `fires_distance`, otherwise the
///   interpolated hit.
/// - neither: interpolated hit (the series may fall back to a sample).
#[must_use]
pub fn nearest_hit(
    series: &Series,
    position: ScreenPoint,
    config: &TrackerManipulatorConfig,
    hints: &mut WindowHintCache,
) -> Option<TrackerHitResult> {
    let within_fires = |hit: &TrackerHitResult| {
        hit.position().distance_to(position) < config.fires_distance
    };

    if config.points_only {
        let hit = series.nearest_point(position, false, hints)?;
        if config.check_distance_between_points && !within_fires(&hit) {
            return None;
        }
        return Some(hit);
    }

    if config.snap {
        if let Some(hit) = series
            .nearest_point(position, false, hints)
            .filter(|hit| within_fires(hit))
        {
            return Some(hit);
        }
    }

    series.nearest_point(position, true, hints)
}
