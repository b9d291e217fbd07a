use serde::{Deserialize, Serialize};

use crate::core::{Easing, EntityKind, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::LayoutMode;

/// Scatter chart setup.
///
/// Serializable so dashboards can ship overrides as JSON; every field has a
/// default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default = "default_scatter_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    /// Gap between the right edge of the plot and the y axis.
    #[serde(default = "default_y_axis_offset_px")]
    pub y_axis_offset_px: f64,
    /// How far markers may overhang the plot before being clipped.
    #[serde(default = "default_clip_padding_px")]
    pub clip_padding_px: f64,
    #[serde(default = "default_caption_font_px")]
    pub caption_font_px: f64,
    #[serde(default = "default_tick_font_px")]
    pub tick_font_px: f64,
    #[serde(default = "default_title_font_px")]
    pub title_font_px: f64,
    #[serde(default = "default_zoom_duration_ms")]
    pub zoom_duration_ms: f64,
    #[serde(default = "default_zoom_easing")]
    pub zoom_easing: Easing,
    /// Prefix of marker links; the point key is appended.
    #[serde(default = "default_submission_link_base")]
    pub submission_link_base: String,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self::new(default_scatter_viewport())
    }
}

impl ScatterChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            marker_radius_px: default_marker_radius_px(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            y_axis_offset_px: default_y_axis_offset_px(),
            clip_padding_px: default_clip_padding_px(),
            caption_font_px: default_caption_font_px(),
            tick_font_px: default_tick_font_px(),
            title_font_px: default_title_font_px(),
            zoom_duration_ms: default_zoom_duration_ms(),
            zoom_easing: default_zoom_easing(),
            submission_link_base: default_submission_link_base(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_marker_radius_px(mut self, radius: f64) -> Self {
        self.marker_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_zoom_duration_ms(mut self, duration_ms: f64) -> Self {
        self.zoom_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_submission_link_base(mut self, base: impl Into<String>) -> Self {
        self.submission_link_base = base.into();
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse scatter chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_plot(self.viewport, self.margins)?;
        validate_positive("marker radius", self.marker_radius_px)?;
        validate_positive("caption font size", self.caption_font_px)?;
        validate_positive("tick font size", self.tick_font_px)?;
        validate_positive("title font size", self.title_font_px)?;
        validate_non_negative("zoom duration", self.zoom_duration_ms)?;
        validate_non_negative("clip padding", self.clip_padding_px)?;
        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn submission_link(&self, key: &str) -> String {
        format!("{}{key}", self.submission_link_base)
    }
}

/// Overview bar chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewChartConfig {
    #[serde(default = "default_overview_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    /// Horizontal padding inside each entity band.
    #[serde(default = "default_group_buffer_px")]
    pub group_buffer_px: f64,
    /// Distance between a bar top and the baseline of its count label.
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default = "default_label_font_px")]
    pub label_font_px: f64,
    #[serde(default = "default_tick_font_px")]
    pub tick_font_px: f64,
    #[serde(default = "default_title_font_px")]
    pub title_font_px: f64,
    #[serde(default = "default_legend_font_px")]
    pub legend_font_px: f64,
    #[serde(default = "default_toggle_duration_ms")]
    pub toggle_duration_ms: f64,
    #[serde(default = "default_toggle_easing")]
    pub toggle_easing: Easing,
    #[serde(default)]
    pub initial_layout: LayoutMode,
    #[serde(default = "default_project_link_base")]
    pub project_link_base: String,
    #[serde(default = "default_user_link_base")]
    pub user_link_base: String,
}

impl Default for OverviewChartConfig {
    fn default() -> Self {
        Self::new(default_overview_viewport())
    }
}

impl OverviewChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            group_buffer_px: default_group_buffer_px(),
            label_gap_px: default_label_gap_px(),
            label_font_px: default_label_font_px(),
            tick_font_px: default_tick_font_px(),
            title_font_px: default_title_font_px(),
            legend_font_px: default_legend_font_px(),
            toggle_duration_ms: default_toggle_duration_ms(),
            toggle_easing: default_toggle_easing(),
            initial_layout: LayoutMode::default(),
            project_link_base: default_project_link_base(),
            user_link_base: default_user_link_base(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_group_buffer_px(mut self, buffer: f64) -> Self {
        self.group_buffer_px = buffer;
        self
    }

    #[must_use]
    pub fn with_toggle_duration_ms(mut self, duration_ms: f64) -> Self {
        self.toggle_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_initial_layout(mut self, layout: LayoutMode) -> Self {
        self.initial_layout = layout;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse overview chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_plot(self.viewport, self.margins)?;
        validate_non_negative("group buffer", self.group_buffer_px)?;
        validate_non_negative("label gap", self.label_gap_px)?;
        validate_positive("label font size", self.label_font_px)?;
        validate_positive("tick font size", self.tick_font_px)?;
        validate_positive("title font size", self.title_font_px)?;
        validate_positive("legend font size", self.legend_font_px)?;
        validate_non_negative("toggle duration", self.toggle_duration_ms)
    }

    #[must_use]
    pub fn entity_link(&self, kind: EntityKind, key: &str) -> String {
        let base = match kind {
            EntityKind::Project => &self.project_link_base,
            EntityKind::User => &self.user_link_base,
        };
        format!("{base}{key}")
    }
}

fn validate_plot(viewport: Viewport, margins: Margins) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    for (name, value) in [
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
        ("left", margins.left),
    ] {
        validate_non_negative(&format!("{name} margin"), value)?;
    }
    if !PlotArea::from_viewport(viewport, margins).is_valid() {
        return Err(ChartError::InvalidData(
            "margins leave no room for the plot".to_owned(),
        ));
    }
    Ok(())
}

fn validate_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_scatter_viewport() -> Viewport {
    Viewport::new(1100, 480)
}

fn default_overview_viewport() -> Viewport {
    Viewport::new(1100, 500)
}

fn default_marker_radius_px() -> f64 {
    5.0
}

fn default_x_tick_count() -> usize {
    7
}

fn default_y_tick_count() -> usize {
    5
}

fn default_y_axis_offset_px() -> f64 {
    25.0
}

fn default_clip_padding_px() -> f64 {
    10.0
}

fn default_caption_font_px() -> f64 {
    10.0
}

fn default_tick_font_px() -> f64 {
    10.0
}

fn default_title_font_px() -> f64 {
    20.0
}

fn default_zoom_duration_ms() -> f64 {
    1000.0
}

fn default_zoom_easing() -> Easing {
    Easing::Linear
}

fn default_submission_link_base() -> String {
    "getsubmissions?assignment-id=".to_owned()
}

fn default_group_buffer_px() -> f64 {
    5.0
}

fn default_label_gap_px() -> f64 {
    2.0
}

fn default_label_font_px() -> f64 {
    9.0
}

fn default_legend_font_px() -> f64 {
    12.0
}

fn default_toggle_duration_ms() -> f64 {
    1500.0
}

fn default_toggle_easing() -> Easing {
    Easing::QuadInOut
}

fn default_project_link_base() -> String {
    "getassignments?project-id=".to_owned()
}

fn default_user_link_base() -> String {
    "getassignments?user-id=".to_owned()
}
