use crate::core::TrackerHitResult;

/// Surface the manipulator pushes tracker updates to.
pub trait PlotView {
    fn show_tracker(&mut self, hit: &TrackerHitResult);
    fn hide_tracker(&mut self);
}
