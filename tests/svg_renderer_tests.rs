use submission_charts::api::{
    OverviewBarEngine, OverviewChartConfig, ScatterChartConfig, ScatterChartEngine,
};
use submission_charts::core::{AxisSpec, DataPoint, EntityKind, OverviewDatum, Viewport};
use submission_charts::render::{
    Color, RectPrimitive, RenderFrame, Renderer, ShapeLink, SvgRenderer,
};

#[test]
fn scatter_markers_become_links_with_tooltips() {
    let mut engine =
        ScatterChartEngine::new(SvgRenderer::new("scatter"), ScatterChartConfig::default())
            .expect("engine init");
    engine
        .render(
            vec![DataPoint::new("a1", 2.0, 90.0).with_owner("thabo", "Sorting")],
            AxisSpec::new("Time", ""),
            AxisSpec::new("Score", "%"),
            EntityKind::Project,
        )
        .expect("render");

    let markup = engine.renderer().markup();
    assert!(markup.starts_with("<svg"));
    assert!(markup.ends_with("</svg>"));
    assert!(markup.contains(r#"<a xlink:href="getsubmissions?assignment-id=a1">"#));
    assert!(markup.contains("<title>thabo&apos;s Sorting\nScore: 90 %\nTime: 2</title>"));
    assert!(markup.contains(r#"<clipPath id="scatter-clip">"#));
    assert!(markup.contains(r#"r="5""#));
}

#[test]
fn every_render_replaces_previous_markup() {
    let mut engine =
        ScatterChartEngine::new(SvgRenderer::default(), ScatterChartConfig::default())
            .expect("engine init");
    engine
        .render(
            vec![DataPoint::new("a1", 1.0, 10.0)],
            AxisSpec::new("Time", ""),
            AxisSpec::new("Score", ""),
            EntityKind::Project,
        )
        .expect("render");
    assert!(engine.renderer().markup().contains("<circle"));

    engine.clear().expect("clear");
    let markup = engine.renderer().markup();
    assert!(!markup.contains("<circle"));
    assert!(!markup.contains("<g"));
    assert_eq!(markup.matches("<svg").count(), 1);
}

#[test]
fn overview_bars_link_to_entity_detail() {
    let mut engine =
        OverviewBarEngine::new(SvgRenderer::new("overview"), OverviewChartConfig::default())
            .expect("engine init");
    engine
        .render(vec![OverviewDatum::new("p<1>", 3, 0, 1)], EntityKind::Project)
        .expect("render");

    let markup = engine.renderer().markup();
    assert!(markup.contains(r#"<a xlink:href="getassignments?project-id=p&lt;1&gt;">"#));
    assert!(markup.contains("<title>p&lt;1&gt;\n3 submissions</title>"));
    assert!(markup.contains(r##"fill="#1f77b4""##));
    assert!(markup.contains(">Launches</text>"));
}

#[test]
fn invalid_frame_is_rejected_and_markup_kept() {
    let mut renderer = SvgRenderer::default();
    let ok = RenderFrame::new(Viewport::new(10, 10)).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        5.0,
        5.0,
        Color::BLACK,
    ));
    renderer.render(&ok).expect("valid frame");
    let before = renderer.markup().to_owned();

    let bad = RenderFrame::new(Viewport::new(10, 10)).with_rect(
        RectPrimitive::new(0.0, 0.0, -1.0, 5.0, Color::BLACK)
            .with_link(ShapeLink::new("x", "y")),
    );
    assert!(renderer.render(&bad).is_err());
    assert_eq!(renderer.markup(), before);
}
