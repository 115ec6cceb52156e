use ordered_float::OrderedFloat;
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::hit_test::{RawHit, nearest_on_segment, nearest_sample};
use crate::core::series::{HitTestable, SeriesBase, is_x_monotonic};
use crate::core::{CurveSlot, DataPoint, ScreenPoint, SeriesAxes, TrackerHitResult, WindowHintCache};

/// Filled band between two boundary curves.
///
/// `points2` may be empty, in which case the band closes against the first
/// curve only and every query behaves like a line over `points`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaSeries {
    base: SeriesBase,
    points: Vec<DataPoint>,
    points2: Vec<DataPoint>,
    x_monotonic: bool,
    x_monotonic2: bool,
}

type CurveSearch = fn(&SeriesAxes, &[DataPoint], usize, ScreenPoint) -> Option<RawHit>;

impl AreaSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, points2: Vec<DataPoint>) -> Self {
        Self {
            base: SeriesBase::default(),
            x_monotonic: is_x_monotonic(&points),
            x_monotonic2: is_x_monotonic(&points2),
            points,
            points2,
        }
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

    #[must_use]
    pub fn points2(&self) -> &[DataPoint] {
        &self.points2
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>, points2: Vec<DataPoint>) {
        self.x_monotonic = is_x_monotonic(&points);
        self.x_monotonic2 = is_x_monotonic(&points2);
        self.points = points;
        self.points2 = points2;
    }

    /// Runs `search` over both curves, each from its own window start, and
    /// keeps the hit closer in x. Ties go to the second curve.
    fn search_both(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
        search: CurveSearch,
    ) -> Option<TrackerHitResult> {
        let axes = self.base.axes()?;
        let start1 = self.base.window_start(
            &self.points,
            self.x_monotonic,
            CurveSlot::Primary,
            point,
            hints,
        )?;
        let start2 = self.base.window_start(
            &self.points2,
            self.x_monotonic2,
            CurveSlot::Secondary,
            point,
            hints,
        )?;

        let mut candidates: SmallVec<[(OrderedFloat<f64>, RawHit); 2]> = SmallVec::new();
        for (curve, start) in [(&self.points2, start2), (&self.points, start1)] {
            if let Some(hit) = search(axes, curve, start, point) {
                let dx = hit.position.x - point.x;
                candidates.push((OrderedFloat(dx * dx), hit));
            }
        }

        candidates
            .into_iter()
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, hit)| self.base.finish_hit(hit))
    }
}

impl HitTestable for AreaSeries {
    fn nearest_sample(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        self.search_both(point, hints, nearest_sample::<SeriesAxes>)
    }

    fn nearest_on_segment(
        &self,
        point: ScreenPoint,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        if !self.base.can_tracker_interpolate_points() {
            return None;
        }
        self.search_both(point, hints, nearest_on_segment::<SeriesAxes>)
    }

    /// Unlike lines, an interpolated query has no sample fallback.
    fn nearest_point(
        &self,
        point: ScreenPoint,
        interpolate: bool,
        hints: &mut WindowHintCache,
    ) -> Option<TrackerHitResult> {
        if interpolate && self.base.can_tracker_interpolate_points() {
            self.nearest_on_segment(point, hints)
        } else {
            self.nearest_sample(point, hints)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AreaSeries;
    use crate::core::{
        DataPoint, HitTestable, PlotRect, ScreenPoint, SeriesAxes, WindowHintCache,
    };

    fn axes() -> SeriesAxes {
        let area = PlotRect::new(0.0, 0.0, 400.0, 100.0).expect("plot area");
        SeriesAxes::for_plot_area(area, (0.0, 4.0), (0.0, 1.0)).expect("axes")
    }

    #[test]
    fn equal_x_distance_prefers_second_curve() {
        let upper = vec![DataPoint::new(0.0, 1.0), DataPoint::new(2.0, 1.0)];
        let lower = vec![DataPoint::new(0.0, 0.0), DataPoint::new(2.0, 0.0)];
        let series = AreaSeries::new(upper, lower).with_axes(axes());
        let mut hints = WindowHintCache::new();

        let hit = series
            .nearest_sample(ScreenPoint::new(0.0, 0.0), &mut hints)
            .expect("hit");
        assert_eq!(hit.data_point(), DataPoint::new(0.0, 0.0));
    }

    #[test]
    fn each_curve_keeps_its_own_window_hint() {
        let first: Vec<_> = (0..20).map(|i| DataPoint::new(i as f64 * 0.2, 1.0)).collect();
        let second = vec![DataPoint::new(0.0, 0.0), DataPoint::new(4.0, 0.0)];
        let series = AreaSeries::new(first, second).with_axes(axes());
        let mut hints = WindowHintCache::new();

        let _ = series.nearest_sample(ScreenPoint::new(300.0, 50.0), &mut hints);
        assert_eq!(hints.len(), 2);
        assert_eq!(hints.get(series.base().id(), crate::core::CurveSlot::Secondary), 0);
    }

    #[test]
    fn interpolation_disabled_falls_back_to_samples() {
        let series = AreaSeries::new(
            vec![DataPoint::new(0.0, 1.0), DataPoint::new(4.0, 1.0)],
            Vec::new(),
        )
        .with_axes(axes())
        .with_tracker_interpolation(false);
        let mut hints = WindowHintCache::new();

        assert!(
            series
                .nearest_on_segment(ScreenPoint::new(200.0, 0.0), &mut hints)
                .is_none()
        );
        let hit = series
            .nearest_point(ScreenPoint::new(150.0, 0.0), true, &mut hints)
            .expect("hit");
        assert_eq!(hit.index(), 0.0);
    }
}
