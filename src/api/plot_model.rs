use std::fmt;

use tracing::trace;

use crate::core::{PlotContext, PlotRect, Series, SeriesId, TrackerHitResult};
use crate::extensions::{TrackerEvent, TrackerPlugin};

/// Ordered series collection plus the plot regions they are drawn in.
///
/// Series order is draw order: later series are drawn on top and win
/// selection ties.
pub struct PlotModel {
    series: Vec<Series>,
    plot_area: PlotRect,
    plot_and_axis_area: PlotRect,
    last_tracker_hit: Option<TrackerHitResult>,
    pub(super) plugins: Vec<Box<dyn TrackerPlugin>>,
}

impl fmt::Debug for PlotModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotModel")
            .field("series", &self.series.len())
            .field("plot_area", &self.plot_area)
            .field("plot_and_axis_area", &self.plot_and_axis_area)
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

impl PlotModel {
    /// Model whose axis area coincides with the plot area.
    #[must_use]
    pub fn new(plot_area: PlotRect) -> Self {
        Self {
            series: Vec::new(),
            plot_area,
            plot_and_axis_area: plot_area,
            last_tracker_hit: None,
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_plot_and_axis_area(mut self, plot_and_axis_area: PlotRect) -> Self {
        self.plot_and_axis_area = plot_and_axis_area;
        self
    }

    /// Appends on top of the existing series.
    pub fn add_series(&mut self, series: impl Into<Series>) -> SeriesId {
        let series = series.into();
        let id = series.id();
        trace!(series = id.get(), kind = ?series.kind(), "add series");
        self.series.push(series);
        id
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series> {
        let position = self.series.iter().position(|series| series.id() == id)?;
        Some(self.series.remove(position))
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|series| series.id() == id)
    }

    pub fn series_by_id_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| series.id() == id)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotRect {
        self.plot_area
    }

    #[must_use]
    pub fn plot_and_axis_area(&self) -> PlotRect {
        self.plot_and_axis_area
    }

    pub fn set_plot_areas(&mut self, plot_area: PlotRect, plot_and_axis_area: PlotRect) {
        self.plot_area = plot_area;
        self.plot_and_axis_area = plot_and_axis_area;
    }

    #[must_use]
    pub fn plot_context(&self) -> PlotContext {
        PlotContext {
            plot_area: self.plot_area,
            plot_and_axis_area: self.plot_and_axis_area,
        }
    }

    /// Hit carried by the most recent tracker-changed notification.
    #[must_use]
    pub fn last_tracker_hit(&self) -> Option<&TrackerHitResult> {
        self.last_tracker_hit.as_ref()
    }

    /// Notifies observers that the tracker moved (`Some`) or closed (`None`).
    pub fn raise_tracker_changed(&mut self, hit: Option<&TrackerHitResult>) {
        self.last_tracker_hit = hit.cloned();
        self.emit_tracker_event(&TrackerEvent::TrackerChanged {
            hit: self.last_tracker_hit.clone(),
        });
    }
}
