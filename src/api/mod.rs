mod axis_frame_builder;
mod config;
mod loader;
mod overview_engine;
mod overview_frame_builder;
mod overview_layout;
mod payload;
mod request_sequencer;
mod scatter_engine;
mod scatter_frame_builder;
mod scatter_projection;
mod source;
mod tooltip;

pub use config::{OverviewChartConfig, ScatterChartConfig};
pub use loader::{ChartLoader, LoadOutcome, PayloadTarget};
pub use overview_engine::OverviewBarEngine;
pub use overview_frame_builder::{bar_tooltip, category_color};
pub use overview_layout::{
    BarGeometry, CategoryDomains, EntityGeometry, LabelAnchor, OverviewGeometry, OverviewLayout,
};
pub use payload::{CHART_DATA_FIELD, CHART_INFO_FIELD, ChartInfo, OverviewPayload, ScatterPayload};
pub use request_sequencer::{RequestSequencer, RequestToken};
pub use scatter_engine::{ScatterChartEngine, ScatterDataset};
pub use scatter_frame_builder::{marker_caption, marker_color};
pub use scatter_projection::{
    AxisTick, MarkerGeometry, ScatterProjection, ScatterScales, project_markers,
};
pub use source::{
    AssignmentChartQuery, CHART_DATA_ENDPOINT, ChartQuery, JsonSource, OverviewChartQuery,
};
#[cfg(feature = "http-source")]
pub use source::HttpJsonSource;
pub use tooltip::{ScatterTooltip, TooltipRow};
