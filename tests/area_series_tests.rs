use chart_tracker::core::{
    AreaSeries, DataPoint, HitTestable, PlotRect, ScreenPoint, Series, SeriesAxes, SeriesKind,
    WindowHintCache,
};

fn axes() -> SeriesAxes {
    let area = PlotRect::new(0.0, 0.0, 400.0, 100.0).expect("plot area");
    SeriesAxes::for_plot_area(area, (0.0, 4.0), (0.0, 1.0)).expect("axes")
}

fn band() -> AreaSeries {
    // Upper curve sampled every 1.0, lower curve offset by half a step.
    let upper = (0..5).map(|i| DataPoint::new(i as f64, 0.8)).collect();
    let lower = (0..4).map(|i| DataPoint::new(i as f64 + 0.5, 0.2)).collect();
    AreaSeries::new(upper, lower).with_title("band").with_axes(axes())
}

#[test]
fn exact_hit_comes_from_curve_closer_in_x() {
    let series = band();
    let mut hints = WindowHintCache::new();

    let near_upper = series
        .nearest_sample(ScreenPoint::new(210.0, 80.0), &mut hints)
        .expect("hit");
    assert_eq!(near_upper.data_point(), DataPoint::new(2.0, 0.8));
    assert!((near_upper.index() - 2.0).abs() <= 1e-9);

    let near_lower = series
        .nearest_sample(ScreenPoint::new(240.0, 20.0), &mut hints)
        .expect("hit");
    assert_eq!(near_lower.data_point(), DataPoint::new(2.5, 0.2));
    assert!((near_lower.index() - 2.0).abs() <= 1e-9);
}

#[test]
fn interpolated_ties_resolve_to_second_curve() {
    let series = band();
    let mut hints = WindowHintCache::new();

    // Both flat curves project to the same screen x.
    let hit = series
        .nearest_on_segment(ScreenPoint::new(275.0, 20.0), &mut hints)
        .expect("hit");
    assert!((hit.data_point().y - 0.2).abs() <= 1e-9);
    assert!((hit.data_point().x - 2.75).abs() <= 1e-9);
    assert!((hit.index() - 2.25).abs() <= 1e-9);

    let hit = series
        .nearest_on_segment(ScreenPoint::new(275.0, 80.0), &mut hints)
        .expect("hit");
    assert!((hit.data_point().y - 0.2).abs() <= 1e-9);
}

#[test]
fn one_empty_curve_falls_back_to_the_other() {
    let series = AreaSeries::new(
        Vec::new(),
        vec![DataPoint::new(1.0, 0.5), DataPoint::new(3.0, 0.5)],
    )
    .with_axes(axes());
    let mut hints = WindowHintCache::new();

    let hit = series
        .nearest_point(ScreenPoint::new(200.0, 50.0), true, &mut hints)
        .expect("hit");
    assert!((hit.data_point().x - 2.0).abs() <= 1e-9);
    assert!((hit.index() - 0.5).abs() <= 1e-9);
}

#[test]
fn interpolated_query_has_no_exact_fallback() {
    let series = AreaSeries::new(vec![DataPoint::new(1.0, 0.5)], vec![DataPoint::new(2.0, 0.5)])
        .with_axes(axes());
    let mut hints = WindowHintCache::new();
    let target = ScreenPoint::new(150.0, 50.0);

    assert!(series.nearest_point(target, true, &mut hints).is_none());
    assert!(series.nearest_point(target, false, &mut hints).is_some());
}

#[test]
fn missing_axes_and_invalid_points_yield_no_hit() {
    let mut hints = WindowHintCache::new();
    let target = ScreenPoint::new(100.0, 50.0);

    let detached = AreaSeries::new(vec![DataPoint::new(0.0, 0.0)], Vec::new());
    assert!(detached.nearest_point(target, false, &mut hints).is_none());

    let invalid = AreaSeries::new(vec![DataPoint::UNDEFINED], vec![DataPoint::UNDEFINED])
        .with_axes(axes());
    assert!(invalid.nearest_point(target, true, &mut hints).is_none());
    assert!(invalid.nearest_point(target, false, &mut hints).is_none());
}

#[test]
fn area_series_dispatches_through_series_enum() {
    let series: Series = band().into();
    let mut hints = WindowHintCache::new();
    assert_eq!(series.kind(), SeriesKind::Area);
    assert_eq!(series.title(), "band");
    assert!(
        series
            .nearest_point(ScreenPoint::new(100.0, 20.0), true, &mut hints)
            .is_some()
    );
}
