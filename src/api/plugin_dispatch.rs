use crate::extensions::{TrackerEvent, TrackerPluginContext};

use super::PlotModel;

impl PlotModel {
    #[must_use]
    pub fn plugin_context(&self) -> TrackerPluginContext {
        TrackerPluginContext {
            plot_area: self.plot_area(),
            plot_and_axis_area: self.plot_and_axis_area(),
            series_count: self.series().len(),
        }
    }

    /// Delivers `event` to every plugin in registration order.
    pub fn emit_tracker_event(&mut self, event: &TrackerEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
