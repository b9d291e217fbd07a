use submission_charts::ChartError;
use submission_charts::api::{OverviewChartConfig, ScatterChartConfig};
use submission_charts::core::{Easing, EntityKind, Margins, Viewport};
use submission_charts::interaction::LayoutMode;

#[test]
fn empty_json_yields_defaults() {
    let scatter = ScatterChartConfig::from_json_str("{}").expect("scatter config");
    assert_eq!(scatter, ScatterChartConfig::default());
    assert_eq!(scatter.viewport, Viewport::new(1100, 480));
    assert_eq!(scatter.margins, Margins::new(10.0, 150.0, 100.0, 100.0));
    assert_eq!((scatter.x_tick_count, scatter.y_tick_count), (7, 5));
    assert_eq!(scatter.zoom_duration_ms, 1000.0);
    assert_eq!(scatter.zoom_easing, Easing::Linear);

    let overview = OverviewChartConfig::from_json_str("{}").expect("overview config");
    assert_eq!(overview, OverviewChartConfig::default());
    assert_eq!(overview.viewport, Viewport::new(1100, 500));
    assert_eq!(overview.toggle_duration_ms, 1500.0);
    assert_eq!(overview.toggle_easing, Easing::QuadInOut);
    assert_eq!(overview.initial_layout, LayoutMode::Stacked);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = ScatterChartConfig::from_json_str(
        r#"{"marker_radius_px": 7.5, "zoom_easing": "QuadInOut"}"#,
    )
    .expect("config");
    assert_eq!(config.marker_radius_px, 7.5);
    assert_eq!(config.zoom_easing, Easing::QuadInOut);
    assert_eq!(config.y_axis_offset_px, 25.0);
}

#[test]
fn zero_viewport_is_rejected() {
    let err = ScatterChartConfig::from_json_str(r#"{"viewport": {"width": 0, "height": 480}}"#)
        .expect_err("invalid");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 480
        }
    ));
}

#[test]
fn margins_wider_than_viewport_are_rejected() {
    let config = OverviewChartConfig::new(Viewport::new(200, 200))
        .with_margins(Margins::new(10.0, 150.0, 100.0, 100.0));
    assert!(config.validate().is_err());
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = OverviewChartConfig::from_json_str("{").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn links_append_record_key() {
    let scatter = ScatterChartConfig::default().with_submission_link_base("/s?id=");
    assert_eq!(scatter.submission_link("9"), "/s?id=9");

    let overview = OverviewChartConfig::default();
    assert_eq!(
        overview.entity_link(EntityKind::Project, "p1"),
        "getassignments?project-id=p1"
    );
    assert_eq!(
        overview.entity_link(EntityKind::User, "u1"),
        "getassignments?user-id=u1"
    );
}

#[test]
fn initial_layout_is_configurable() {
    let config = OverviewChartConfig::from_json_str(r#"{"initial_layout": "Grouped"}"#)
        .expect("config");
    assert_eq!(config.initial_layout, LayoutMode::Grouped);
    assert_eq!(
        OverviewChartConfig::default()
            .with_initial_layout(LayoutMode::Grouped)
            .initial_layout,
        LayoutMode::Grouped
    );
}
