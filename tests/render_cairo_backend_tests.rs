#![cfg(feature = "cairo-backend")]

use submission_charts::ChartError;
use submission_charts::api::{
    OverviewBarEngine, OverviewChartConfig, ScatterChartConfig, ScatterChartEngine,
};
use submission_charts::core::{AxisSpec, DataPoint, EntityKind, OverviewDatum};
use submission_charts::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_scatter_markers() {
    let renderer = CairoRenderer::new(1100, 480).expect("renderer");
    let mut engine =
        ScatterChartEngine::new(renderer, ScatterChartConfig::default()).expect("engine init");
    engine
        .render(
            vec![
                DataPoint::new("a1", 1.0, 10.0).with_owner("thabo", "Sorting"),
                DataPoint::new("a2", 2.0, 90.0).with_owner("lerato", "Sorting"),
            ],
            AxisSpec::new("Time", ""),
            AxisSpec::new("Score", "%"),
            EntityKind::Project,
        )
        .expect("render");

    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.circles_drawn, 2);
    assert!(stats.texts_drawn >= 4);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_draws_overview_bars() {
    let renderer = CairoRenderer::new(1100, 500).expect("renderer");
    let mut engine =
        OverviewBarEngine::new(renderer, OverviewChartConfig::default()).expect("engine init");
    engine
        .render(
            vec![
                OverviewDatum::new("p1", 4, 2, 1),
                OverviewDatum::new("p2", 0, 6, 3),
            ],
            EntityKind::Project,
        )
        .expect("render");

    let stats = engine.renderer().last_stats();
    // Six bars plus the plot background and three legend swatches.
    assert_eq!(stats.rects_drawn, 10);
}
