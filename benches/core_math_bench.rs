use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use submission_charts::api::{
    OverviewLayout, ScatterChartConfig, ScatterChartEngine, ScatterScales, project_markers,
};
use submission_charts::core::{
    AxisSpec, DataPoint, EntityKind, OverviewDatum, PlotArea, ZoomTransform, compute_extent,
};
use submission_charts::interaction::LayoutMode;
use submission_charts::render::NullRenderer;

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.25;
            let y = (i * 37 % 100) as f64;
            let point = DataPoint::new(format!("a{i}"), x, y).with_owner("user", "project");
            if i % 17 == 0 {
                point.with_outlier(y * 1.8)
            } else {
                point
            }
        })
        .collect()
}

fn plot() -> PlotArea {
    PlotArea {
        left: 100.0,
        top: 10.0,
        width: 850.0,
        height: 370.0,
    }
}

fn bench_compute_extent_10k(c: &mut Criterion) {
    let points = sample_points(10_000);

    c.bench_function("compute_extent_10k", |b| {
        b.iter(|| {
            let _ = compute_extent(black_box(&points), |point| point.effective_y(true))
                .expect("extent");
        })
    });
}

fn bench_marker_projection_10k(c: &mut Criterion) {
    let points = sample_points(10_000);
    let scales = ScatterScales::fit(&points, true, plot()).expect("scales");

    c.bench_function("marker_projection_10k", |b| {
        b.iter(|| {
            let _ = project_markers(black_box(&points), black_box(scales), black_box(true))
                .expect("projection should succeed");
        })
    });
}

fn bench_overview_layout_500(c: &mut Criterion) {
    let data: Vec<OverviewDatum> = (0..500)
        .map(|i| OverviewDatum::new(format!("p{i}"), i % 40, i % 90, i % 13))
        .collect();
    let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");

    c.bench_function("overview_layout_500", |b| {
        b.iter(|| {
            let _ = layout
                .geometry(black_box(&data), black_box(LayoutMode::Grouped))
                .expect("geometry");
        })
    });
}

fn bench_scatter_zoom_cycle_1k(c: &mut Criterion) {
    let mut engine =
        ScatterChartEngine::new(NullRenderer::default(), ScatterChartConfig::default())
            .expect("engine init");
    engine
        .render(
            sample_points(1_000),
            AxisSpec::new("Time", ""),
            AxisSpec::new("Score", "%"),
            EntityKind::Project,
        )
        .expect("render");

    c.bench_function("scatter_zoom_cycle_1k", |b| {
        b.iter(|| {
            for factor in [2.0, 0.5] {
                engine
                    .on_zoom(black_box(ZoomTransform::scale_about(factor, 425.0, 185.0)))
                    .expect("zoom");
                engine.finish_animation().expect("finish");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_compute_extent_10k,
    bench_marker_projection_10k,
    bench_overview_layout_500,
    bench_scatter_zoom_cycle_1k
);
criterion_main!(benches);
