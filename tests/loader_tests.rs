use serde_json::{Value, json};
use submission_charts::api::{
    AssignmentChartQuery, ChartLoader, ChartQuery, JsonSource, LoadOutcome, OverviewBarEngine,
    OverviewChartConfig, OverviewChartQuery, ScatterChartConfig, ScatterChartEngine,
};
use submission_charts::core::EntityKind;
use submission_charts::render::NullRenderer;
use submission_charts::{ChartError, ChartResult};

/// Canned source recording every request it serves.
#[derive(Default)]
struct StubSource {
    requests: Vec<(String, Vec<(String, String)>)>,
    response: Option<Value>,
}

impl JsonSource for StubSource {
    fn fetch_json(&mut self, endpoint: &str, params: &[(String, String)]) -> ChartResult<Value> {
        self.requests.push((endpoint.to_owned(), params.to_vec()));
        self.response
            .clone()
            .ok_or_else(|| ChartError::Fetch("connection refused".to_owned()))
    }
}

fn scatter_payload(y: f64) -> Value {
    json!({
        "chart-data": [{"x": 1, "y": y, "key": "a1", "user": "u", "project": "p"}],
        "chart-info": {"x": "Time", "y": "Score", "x-unit": "", "y-unit": "%"}
    })
}

fn scatter_engine() -> ScatterChartEngine<NullRenderer> {
    ScatterChartEngine::new(NullRenderer::default(), ScatterChartConfig::default())
        .expect("engine init")
}

#[test]
fn load_fetches_with_query_parameters_and_draws() {
    let mut source = StubSource {
        response: Some(scatter_payload(40.0)),
        ..StubSource::default()
    };
    let mut engine = scatter_engine();
    let mut loader = ChartLoader::new();
    let query = AssignmentChartQuery::new("42", "Time", "Score", EntityKind::User);

    let outcome = loader
        .load(&mut source, &query, &mut engine)
        .expect("load");

    assert_eq!(outcome, LoadOutcome::Drawn);
    assert_eq!(source.requests.len(), 1);
    let (endpoint, params) = &source.requests[0];
    assert_eq!(endpoint, "chart-data");
    assert!(params.contains(&("id".to_owned(), "42".to_owned())));
    assert_eq!(engine.dataset().expect("dataset").grouping, EntityKind::User);
}

#[test]
fn stale_response_is_dropped() {
    let mut engine = scatter_engine();
    let mut loader = ChartLoader::new();
    let query = AssignmentChartQuery::new("42", "Time", "Score", EntityKind::Project);

    let first = loader.begin();
    let second = loader.begin();

    let late = loader
        .complete(second, &query, &scatter_payload(80.0), &mut engine)
        .expect("second");
    let early = loader
        .complete(first, &query, &scatter_payload(20.0), &mut engine)
        .expect("first");

    assert_eq!(late, LoadOutcome::Drawn);
    assert_eq!(early, LoadOutcome::Stale);
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.dataset().expect("dataset").points[0].y, 80.0);
}

#[test]
fn older_response_arriving_first_is_still_dropped() {
    let mut engine = scatter_engine();
    let mut loader = ChartLoader::new();
    let query = AssignmentChartQuery::new("42", "Time", "Score", EntityKind::Project);

    let first = loader.begin();
    let second = loader.begin();
    assert_eq!(
        loader
            .complete(first, &query, &scatter_payload(20.0), &mut engine)
            .expect("first"),
        LoadOutcome::Stale
    );
    assert_eq!(engine.renderer().render_count, 0);
    assert_eq!(
        loader
            .complete(second, &query, &scatter_payload(80.0), &mut engine)
            .expect("second"),
        LoadOutcome::Drawn
    );
    assert_eq!(loader.latest(), Some(second));
}

#[test]
fn overview_query_targets_overview_engine() {
    let mut source = StubSource {
        response: Some(json!([
            {"key": "u1", "submissions": 1, "snapshots": 2, "launches": 3}
        ])),
        ..StubSource::default()
    };
    let mut engine = OverviewBarEngine::new(NullRenderer::default(), OverviewChartConfig::default())
        .expect("engine init");
    let query = OverviewChartQuery::new(EntityKind::User);

    ChartLoader::new()
        .load(&mut source, &query, &mut engine)
        .expect("load");

    assert_eq!(engine.entity_kind(), EntityKind::User);
    assert_eq!(engine.data().len(), 1);
    assert!(
        query
            .params()
            .contains(&("view".to_owned(), "user".to_owned()))
    );
}

#[test]
fn fetch_failure_surfaces_without_drawing() {
    let mut source = StubSource::default();
    let mut engine = scatter_engine();
    let query = AssignmentChartQuery::new("42", "Time", "Score", EntityKind::Project);

    let err = ChartLoader::new()
        .load(&mut source, &query, &mut engine)
        .expect_err("fetch fails");

    assert!(matches!(err, ChartError::Fetch(_)));
    assert_eq!(engine.renderer().render_count, 0);
}
