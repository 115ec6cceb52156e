use ordered_float::OrderedFloat;
use tracing::trace;

#[cfg(feature = "parallel-selection")]
use rayon::prelude::*;

use crate::core::{HitTestable, ScreenPoint, Series, SeriesId, WindowHintCache};

use super::PlotModel;

impl PlotModel {
    /// Series whose tracker hit is nearest to `point`, if closer than `limit`.
    ///
    /// Candidates are the visible series accepted by `predicate`, scanned in
    /// reverse draw order. Each is measured by the full 2-D screen distance
    /// to its interpolated hit (exact hit when none), or to its exact hit
    /// alone when `interpolate` is off. The first candidate with the strictly
    /// smallest distance wins.
    pub fn series_from_point<P>(
        &self,
        point: ScreenPoint,
        predicate: P,
        interpolate: bool,
        limit: f64,
        hints: &mut WindowHintCache,
    ) -> Option<SeriesId>
    where
        P: Fn(&Series) -> bool + Sync,
    {
        // Candidate scans run on hint snapshots; updates are discarded.
        #[cfg(feature = "parallel-selection")]
        let nearest = {
            let shared: &WindowHintCache = hints;
            self.series()
                .par_iter()
                .enumerate()
                .filter(|(_, series)| series.is_visible() && predicate(*series))
                .filter_map(|(draw_index, series)| {
                    let mut local = shared.snapshot_for(series.id());
                    candidate_distance(series, point, interpolate, &mut local)
                        .map(|distance| (distance, draw_index, series.id()))
                })
                .min_by_key(|(distance, draw_index, _)| {
                    (OrderedFloat(*distance), std::cmp::Reverse(*draw_index))
                })
                .map(|(distance, _, id)| (distance, id))
        };

        #[cfg(not(feature = "parallel-selection"))]
        let nearest = self
            .series()
            .iter()
            .rev()
            .filter(|series| series.is_visible() && predicate(*series))
            .filter_map(|series| {
                candidate_distance(series, point, interpolate, hints)
                    .map(|distance| (distance, series.id()))
            })
            .min_by_key(|(distance, _)| OrderedFloat(*distance));

        let (distance, id) = nearest?;
        trace!(series = id.get(), distance, limit, "nearest series");
        (distance < limit).then_some(id)
    }
}

/// 2-D screen distance from `point` to the series' tracker hit.
///
/// Unreachable distances (non-finite or `f64::MAX`) never compete.
fn candidate_distance(
    series: &Series,
    point: ScreenPoint,
    interpolate: bool,
    hints: &mut WindowHintCache,
) -> Option<f64> {
    let interpolated = if interpolate {
        series.nearest_point(point, true, hints)
    } else {
        None
    };
    let hit = interpolated.or_else(|| series.nearest_point(point, false, hints))?;
    let distance = point.distance_to(hit.position());
    (distance < f64::MAX).then_some(distance)
}
