use serde_json::Value;

use crate::core::EntityKind;
use crate::error::ChartResult;

pub const CHART_DATA_ENDPOINT: &str = "chart-data";

/// Data-fetch capability consumed by the chart loaders.
///
/// Implementations return the decoded JSON body of a successful response.
/// Transport failures are reported as `ChartError::Fetch`.
pub trait JsonSource {
    fn fetch_json(&mut self, endpoint: &str, params: &[(String, String)]) -> ChartResult<Value>;
}

/// Endpoint plus query parameters for one chart request.
pub trait ChartQuery {
    fn endpoint(&self) -> &str {
        CHART_DATA_ENDPOINT
    }

    fn params(&self) -> Vec<(String, String)>;
}

/// Scatter data for the assignments of one project or user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentChartQuery {
    pub id: String,
    pub x_field: String,
    pub y_field: String,
    pub grouping: EntityKind,
}

impl AssignmentChartQuery {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        x_field: impl Into<String>,
        y_field: impl Into<String>,
        grouping: EntityKind,
    ) -> Self {
        Self {
            id: id.into(),
            x_field: x_field.into(),
            y_field: y_field.into(),
            grouping,
        }
    }
}

impl ChartQuery for AssignmentChartQuery {
    fn params(&self) -> Vec<(String, String)> {
        vec![
            ("type".to_owned(), "assignment".to_owned()),
            ("id".to_owned(), self.id.clone()),
            ("x".to_owned(), self.x_field.clone()),
            ("y".to_owned(), self.y_field.clone()),
            (
                "assignment-type".to_owned(),
                self.grouping.as_str().to_owned(),
            ),
        ]
    }
}

/// Per-entity activity counts for every project or user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewChartQuery {
    pub view: EntityKind,
}

impl OverviewChartQuery {
    #[must_use]
    pub fn new(view: EntityKind) -> Self {
        Self { view }
    }
}

impl ChartQuery for OverviewChartQuery {
    fn params(&self) -> Vec<(String, String)> {
        vec![
            ("type".to_owned(), "overview".to_owned()),
            ("view".to_owned(), self.view.as_str().to_owned()),
        ]
    }
}

#[cfg(feature = "http-source")]
mod http {
    use serde_json::Value;
    use tracing::debug;

    use super::JsonSource;
    use crate::error::{ChartError, ChartResult};

    /// Blocking HTTP source resolving endpoints against a base URL.
    #[derive(Debug, Clone)]
    pub struct HttpJsonSource {
        base_url: String,
        client: reqwest::blocking::Client,
    }

    impl HttpJsonSource {
        #[must_use]
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(base_url, reqwest::blocking::Client::new())
        }

        #[must_use]
        pub fn with_client(base_url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
            let mut base_url = base_url.into();
            if !base_url.ends_with('/') {
                base_url.push('/');
            }
            Self { base_url, client }
        }
    }

    impl JsonSource for HttpJsonSource {
        fn fetch_json(
            &mut self,
            endpoint: &str,
            params: &[(String, String)],
        ) -> ChartResult<Value> {
            let url = format!("{}{}", self.base_url, endpoint.trim_start_matches('/'));
            debug!(url = %url, params = params.len(), "fetch chart json");
            self.client
                .get(&url)
                .query(params)
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .map_err(|err| ChartError::Fetch(format!("GET {url}: {err}")))?
                .json::<Value>()
                .map_err(|err| ChartError::Fetch(format!("decode {url}: {err}")))
        }
    }
}

#[cfg(feature = "http-source")]
pub use http::HttpJsonSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_query_uses_wire_parameter_names() {
        let query = AssignmentChartQuery::new("a1", "Time", "Passed", EntityKind::User);
        let params = query.params();
        assert_eq!(query.endpoint(), "chart-data");
        assert!(params.contains(&("assignment-type".to_owned(), "user".to_owned())));
        assert!(params.contains(&("type".to_owned(), "assignment".to_owned())));
    }
}
