use serde::Serialize;

use crate::core::{PlotRect, SeriesId, TrackerHitResult};

/// Read-only model snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackerPluginContext {
    pub plot_area: PlotRect,
    pub plot_and_axis_area: PlotRect,
    pub series_count: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TrackerEvent {
    /// `None` when the tracker closed.
    TrackerChanged { hit: Option<TrackerHitResult> },
    SeriesLocked { series: SeriesId },
    SeriesReleased { series: SeriesId },
}

/// Observer of tracker activity on a `PlotModel`.
///
/// Plugins see events and a context snapshot; they cannot mutate the model.
pub trait TrackerPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &TrackerEvent, context: TrackerPluginContext);
}
