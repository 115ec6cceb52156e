use chart_tracker::PlotSurfaceConfig;
use chart_tracker::interaction::{SeriesFilter, TrackerManipulatorConfig};
use chart_tracker::render::{Color, TrackerOverlayStyle};

#[test]
fn manipulator_config_round_trips_through_json() {
    let config = TrackerManipulatorConfig::default()
        .with_snap(true)
        .with_points_only(true)
        .with_lock_to_initial_series(false)
        .with_fires_distance(48.0)
        .with_check_distance_between_points(true)
        .with_series_filter(SeriesFilter::AreaOnly);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"series_filter\": \"AreaOnly\""));
    let parsed = TrackerManipulatorConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_manipulator_config_keeps_defaults() {
    let parsed =
        TrackerManipulatorConfig::from_json_str(r#"{ "snap": true, "series_filter": "LineOnly" }"#)
            .expect("parse");
    assert!(parsed.snap);
    assert!(parsed.lock_to_initial_series);
    assert_eq!(parsed.fires_distance, 200.0);
    assert_eq!(parsed.series_filter, SeriesFilter::LineOnly);
}

#[test]
fn malformed_manipulator_config_reports_parse_error() {
    let error = TrackerManipulatorConfig::from_json_str("{ snap: yes }").expect_err("must fail");
    assert!(error.to_string().contains("failed to parse tracker config"));
}

#[test]
fn infinite_fires_distance_does_not_survive_json() {
    // JSON has no infinity; serde_json writes `null`, which is not an f64.
    let config = TrackerManipulatorConfig::default().with_fires_distance(f64::INFINITY);
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"fires_distance\": null"));
    assert!(TrackerManipulatorConfig::from_json_str(&json).is_err());
}

#[test]
fn surface_config_parses_and_validates() {
    let config: PlotSurfaceConfig =
        serde_json::from_str(r#"{ "display_scale": 2.5 }"#).expect("parse");
    assert_eq!(config.validate().expect("valid").display_scale, 2.5);

    let defaulted: PlotSurfaceConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(defaulted, PlotSurfaceConfig::default());

    let zero: PlotSurfaceConfig =
        serde_json::from_str(r#"{ "display_scale": 0.0 }"#).expect("parse");
    assert!(zero.validate().is_err());
}

#[test]
fn overlay_style_round_trips_through_json() {
    let style = TrackerOverlayStyle::default()
        .with_line(Color::rgba(0.2, 0.2, 0.2, 0.5), 1.5)
        .with_marker(Color::WHITE, 6.0);
    let json = serde_json::to_string(&style).expect("serialize");
    let parsed: TrackerOverlayStyle = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, style);
    assert!(parsed.validate().is_ok());
}
