//! submission-charts: chart engines for a code-submission tracking dashboard.
//!
//! Two charts are provided: a zoomable per-assignment scatter chart with an
//! outlier toggle, and a per-entity activity overview drawn as stacked or
//! grouped bars. Engines turn data plus presentation state into a
//! backend-agnostic `RenderFrame` handed to a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartLoader, OverviewBarEngine, OverviewChartConfig, ScatterChartConfig, ScatterChartEngine,
};
pub use error::{ChartError, ChartResult};
