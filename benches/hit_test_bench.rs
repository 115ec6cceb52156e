use chart_tracker::api::PlotModel;
use chart_tracker::core::{
    DataPoint, HitTestable, LineSeries, PlotRect, ScreenPoint, SeriesAxes, WindowHintCache,
    find_window_start,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLES: usize = 50_000;

fn generated_points() -> Vec<DataPoint> {
    (0..SAMPLES)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, (x * 0.01).sin() * 0.5 + 0.5)
        })
        .collect()
}

fn generated_series() -> LineSeries {
    let area = PlotRect::new(0.0, 0.0, 1920.0, 1080.0).expect("valid plot area");
    let axes = SeriesAxes::for_plot_area(area, (0.0, SAMPLES as f64), (0.0, 1.0))
        .expect("valid axes");
    LineSeries::new(generated_points()).with_axes(axes)
}

fn bench_window_start_50k(c: &mut Criterion) {
    let points = generated_points();

    c.bench_function("window_start_50k_cold", |b| {
        b.iter(|| {
            let _ = find_window_start(
                black_box(points.as_slice()),
                |point: &DataPoint| point.x,
                black_box(37_123.4),
                black_box(0),
            );
        })
    });

    c.bench_function("window_start_50k_warm", |b| {
        b.iter(|| {
            let _ = find_window_start(
                black_box(points.as_slice()),
                |point: &DataPoint| point.x,
                black_box(37_123.4),
                black_box(37_120),
            );
        })
    });
}

fn bench_line_hit_test_50k(c: &mut Criterion) {
    let series = generated_series();

    c.bench_function("line_drag_hit_test_50k", |b| {
        let mut hints = WindowHintCache::new();
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 3.0) % 1920.0;
            let _ = series.nearest_point(black_box(ScreenPoint::new(x, 540.0)), true, &mut hints);
        })
    });

    c.bench_function("line_exact_hit_test_50k", |b| {
        let mut hints = WindowHintCache::new();
        b.iter(|| {
            let _ = series.nearest_sample(black_box(ScreenPoint::new(960.0, 540.0)), &mut hints);
        })
    });
}

fn bench_series_selection(c: &mut Criterion) {
    let area = PlotRect::new(0.0, 0.0, 1920.0, 1080.0).expect("valid plot area");
    let mut model = PlotModel::new(area);
    for _ in 0..16 {
        model.add_series(generated_series());
    }

    c.bench_function("series_selection_16x50k", |b| {
        let mut hints = WindowHintCache::new();
        b.iter(|| {
            let _ = model.series_from_point(
                black_box(ScreenPoint::new(812.0, 300.0)),
                |_| true,
                true,
                200.0,
                &mut hints,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_window_start_50k,
    bench_line_hit_test_50k,
    bench_series_selection
);
criterion_main!(benches);
