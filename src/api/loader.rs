use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    AssignmentChartQuery, ChartQuery, JsonSource, OverviewBarEngine, OverviewChartQuery,
    RequestSequencer, RequestToken, ScatterChartEngine,
};

/// Engine that can draw the response of query type `Q`.
pub trait PayloadTarget<Q: ChartQuery> {
    fn draw_payload(&mut self, query: &Q, payload: &Value) -> ChartResult<()>;
}

impl<R: Renderer> PayloadTarget<AssignmentChartQuery> for ScatterChartEngine<R> {
    fn draw_payload(&mut self, query: &AssignmentChartQuery, payload: &Value) -> ChartResult<()> {
        self.render_payload(payload, query.grouping)
    }
}

impl<R: Renderer> PayloadTarget<OverviewChartQuery> for OverviewBarEngine<R> {
    fn draw_payload(&mut self, query: &OverviewChartQuery, payload: &Value) -> ChartResult<()> {
        self.render_payload(payload, query.view)
    }
}

/// What became of one completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Drawn,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

/// Fetch-and-draw driver that keeps the drawn chart in step with the most
/// recent request.
///
/// Hosts with asynchronous fetches call `begin` when a request goes out and
/// `complete` when its response arrives, in whatever order responses come
/// back.
#[derive(Debug, Default)]
pub struct ChartLoader {
    sequencer: RequestSequencer,
}

impl ChartLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestToken {
        let token = self.sequencer.issue();
        debug!(token = token.value(), "chart request issued");
        token
    }

    #[must_use]
    pub fn latest(&self) -> Option<RequestToken> {
        self.sequencer.latest()
    }

    pub fn complete<Q, T>(
        &mut self,
        token: RequestToken,
        query: &Q,
        payload: &Value,
        target: &mut T,
    ) -> ChartResult<LoadOutcome>
    where
        Q: ChartQuery,
        T: PayloadTarget<Q>,
    {
        if !self.sequencer.complete(token) {
            warn!(
                token = token.value(),
                latest = ?self.sequencer.latest().map(RequestToken::value),
                "dropping stale chart response"
            );
            return Ok(LoadOutcome::Stale);
        }
        target.draw_payload(query, payload)?;
        Ok(LoadOutcome::Drawn)
    }

    /// Synchronous fetch followed by a draw.
    pub fn load<S, Q, T>(
        &mut self,
        source: &mut S,
        query: &Q,
        target: &mut T,
    ) -> ChartResult<LoadOutcome>
    where
        S: JsonSource + ?Sized,
        Q: ChartQuery,
        T: PayloadTarget<Q>,
    {
        let token = self.begin();
        let payload = source.fetch_json(query.endpoint(), &query.params())?;
        self.complete(token, query, &payload, target)
    }
}
