use chart_tracker::api::PlotModel;
use chart_tracker::core::geometry::project_onto_segment;
use chart_tracker::core::{
    DataPoint, HitTestable, LineSeries, PlotRect, ScreenPoint, SeriesAxes, SeriesId,
    WindowHintCache,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = ScreenPoint> {
    (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0).prop_map(|(x, y)| ScreenPoint::new(x, y))
}

/// Linear scan in reverse draw order with cold hints for every series.
fn scan_nearest_series(
    model: &PlotModel,
    point: ScreenPoint,
    interpolate: bool,
    limit: f64,
) -> Option<SeriesId> {
    let mut best: Option<(f64, SeriesId)> = None;
    for series in model.series().iter().rev().filter(|series| series.is_visible()) {
        let mut hints = WindowHintCache::new();
        let interpolated = if interpolate {
            series.nearest_point(point, true, &mut hints)
        } else {
            None
        };
        let Some(hit) = interpolated.or_else(|| series.nearest_point(point, false, &mut hints))
        else {
            continue;
        };
        let distance = point.distance_to(hit.position());
        if distance >= f64::MAX || distance.is_nan() {
            continue;
        }
        if best.is_none_or(|(current, _)| distance < current) {
            best = Some((distance, series.id()));
        }
    }
    best.filter(|(distance, _)| *distance < limit).map(|(_, id)| id)
}

proptest! {
    #[test]
    fn projection_parameter_stays_on_segment(p in point(), p1 in point(), p2 in point()) {
        prop_assume!(p1.distance_squared_to(p2) >= 1e-3);
        let projection = project_onto_segment(p, p1, p2).expect("segment");
        prop_assert!((0.0..=1.0).contains(&projection.u));

        let min_x = p1.x.min(p2.x) - 1e-9;
        let max_x = p1.x.max(p2.x) + 1e-9;
        prop_assert!(projection.point.x >= min_x && projection.point.x <= max_x);
    }

    #[test]
    fn coincident_endpoints_never_project(p in point(), p1 in point()) {
        prop_assert!(project_onto_segment(p, p1, p1).is_none());
    }

    #[test]
    fn selection_threshold_bounds(
        ys in proptest::collection::vec(0.0f64..1.0, 1..6),
        query in (0.0f64..400.0, -200.0f64..300.0),
    ) {
        let area = PlotRect::new(0.0, 0.0, 400.0, 100.0).expect("plot area");
        let axes = SeriesAxes::for_plot_area(area, (0.0, 4.0), (0.0, 1.0)).expect("axes");
        let mut model = PlotModel::new(area);
        for y in ys {
            model.add_series(
                LineSeries::new((0..5).map(|i| DataPoint::new(i as f64, y)).collect())
                    .with_axes(axes.clone()),
            );
        }
        let mut hints = WindowHintCache::new();
        let query = ScreenPoint::new(query.0, query.1);

        prop_assert!(model.series_from_point(query, |_| true, true, 0.0, &mut hints).is_none());
        prop_assert!(
            model
                .series_from_point(query, |_| true, true, f64::INFINITY, &mut hints)
                .is_some()
        );
    }

    #[test]
    fn selection_matches_linear_scan(
        // Coarse levels so several series tie exactly.
        curves in proptest::collection::vec(proptest::collection::vec(0u8..5, 2..8), 1..12),
        hidden in proptest::collection::vec(any::<bool>(), 12),
        queries in proptest::collection::vec((-40.0f64..440.0, -60.0f64..160.0), 1..16),
        interpolate in any::<bool>(),
        limit in 0.0f64..120.0,
    ) {
        let area = PlotRect::new(0.0, 0.0, 400.0, 100.0).expect("plot area");
        let axes = SeriesAxes::for_plot_area(area, (0.0, 4.0), (0.0, 1.0)).expect("axes");
        let mut model = PlotModel::new(area);
        for (curve, hide) in curves.iter().zip(&hidden) {
            let step = 4.0 / (curve.len() - 1) as f64;
            let mut series = LineSeries::new(
                curve
                    .iter()
                    .enumerate()
                    .map(|(i, level)| DataPoint::new(i as f64 * step, f64::from(*level) * 0.25))
                    .collect(),
            )
            .with_axes(axes.clone());
            series.base_mut().set_visible(!hide);
            model.add_series(series);
        }

        // One warm cache across the whole drag.
        let mut hints = WindowHintCache::new();
        for (x, y) in queries {
            let point = ScreenPoint::new(x, y);
            let expected = scan_nearest_series(&model, point, interpolate, limit);
            let picked = model.series_from_point(point, |_| true, interpolate, limit, &mut hints);
            prop_assert_eq!(picked, expected);
        }
    }
}
