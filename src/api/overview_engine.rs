use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{EntityKind, OverviewDatum, Transition};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{LayoutMode, PresentationInput, PresentationState};
use crate::render::{RenderFrame, Renderer};

use super::overview_frame_builder::{OverviewFrameContext, build_overview_frame};
use super::{
    EntityGeometry, OverviewChartConfig, OverviewGeometry, OverviewLayout, OverviewPayload,
};

/// Activity counts per project or user, as stacked or grouped bars.
///
/// Clicking the chart body flips the layout and animates every bar and
/// label to its place in the other layout.
pub struct OverviewBarEngine<R: Renderer> {
    renderer: R,
    config: OverviewChartConfig,
    presentation: PresentationState,
    data: Vec<OverviewDatum>,
    kind: EntityKind,
    layout: Option<OverviewLayout>,
    geometry: OverviewGeometry,
    animation: Option<Transition<OverviewGeometry>>,
}

impl<R: Renderer> OverviewBarEngine<R> {
    pub fn new(renderer: R, config: OverviewChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let presentation = PresentationState::new(false, config.initial_layout);
        Ok(Self {
            renderer,
            config,
            presentation,
            data: Vec::new(),
            kind: EntityKind::Project,
            layout: None,
            geometry: Vec::new(),
            animation: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &OverviewChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.presentation.layout_mode()
    }

    #[must_use]
    pub fn entity_kind(&self) -> EntityKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &[OverviewDatum] {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> Option<&OverviewLayout> {
        self.layout.as_ref()
    }

    /// Settled geometry of the current layout mode.
    #[must_use]
    pub fn geometry(&self) -> &[EntityGeometry] {
        &self.geometry
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Draws `data` grouped by `kind` in the current layout mode.
    pub fn render(&mut self, data: Vec<OverviewDatum>, kind: EntityKind) -> ChartResult<()> {
        self.data = data;
        self.kind = kind;
        self.animation = None;
        self.layout = None;
        self.geometry.clear();

        if self.data.is_empty() {
            debug!(kind = kind.as_str(), "overview has no records; clearing surface");
            return self.renderer.render(&RenderFrame::new(self.config.viewport));
        }

        let layout = OverviewLayout::new(
            &self.data,
            self.config.plot_area(),
            self.config.group_buffer_px,
            self.config.label_gap_px,
        )?;
        let mode = self.presentation.layout_mode();
        self.geometry = layout.geometry(&self.data, mode)?;
        debug!(
            records = self.data.len(),
            kind = kind.as_str(),
            layout = ?mode,
            "render overview chart"
        );
        self.layout = Some(layout);
        let geometry = self.geometry.clone();
        self.draw(&geometry)
    }

    /// Decodes an overview response and draws it.
    ///
    /// Missing fields clear the surface instead of failing.
    pub fn render_payload(&mut self, payload: &Value, kind: EntityKind) -> ChartResult<()> {
        match OverviewPayload::from_value(payload) {
            Ok(payload) => self.render(payload.records, kind),
            Err(ChartError::MissingData { field }) => {
                debug!(field = %field, "overview payload incomplete; clearing chart");
                self.render(Vec::new(), kind)
            }
            Err(err) => Err(err),
        }
    }

    /// Flips stacked/grouped and starts animating towards the new layout.
    ///
    /// A toggle during a running animation starts from the geometry shown
    /// at that moment. Returns the new mode.
    pub fn toggle_layout(&mut self) -> ChartResult<LayoutMode> {
        let mode = self.presentation.toggle_layout();
        debug!(layout = ?mode, "toggle overview layout");
        let Some(layout) = &self.layout else {
            return Ok(mode);
        };

        let target = layout.geometry(&self.data, mode)?;
        let start = match &self.animation {
            Some(animation) => animation.current(),
            None => self.geometry.clone(),
        };
        self.animation = Some(Transition::new(
            start,
            target.clone(),
            self.config.toggle_duration_ms,
            self.config.toggle_easing,
        )?);
        self.geometry = target;
        self.advance_animation(0.0)?;
        Ok(mode)
    }

    pub fn handle_input(&mut self, input: PresentationInput) -> ChartResult<()> {
        match input {
            PresentationInput::ChartBodyClicked => self.toggle_layout().map(|_| ()),
            PresentationInput::OutlierCheckboxClicked => Ok(()),
        }
    }

    /// Draws the running animation at `elapsed_ms`; `true` while frames remain.
    pub fn advance_animation(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(false);
        };
        let frame_geometry = animation.sample(elapsed_ms);
        let finished = animation.is_finished();
        trace!(elapsed_ms, finished, "advance overview animation");
        if finished {
            self.animation = None;
        }
        self.draw(&frame_geometry)?;
        Ok(!finished)
    }

    pub fn finish_animation(&mut self) -> ChartResult<()> {
        if let Some(duration_ms) = self.animation.as_ref().map(Transition::duration_ms) {
            self.advance_animation(duration_ms)?;
        }
        Ok(())
    }

    /// Frame for the current state without touching the renderer.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        match &self.animation {
            Some(animation) => self.frame_for(&animation.current()),
            None => self.frame_for(&self.geometry),
        }
    }

    fn draw(&mut self, geometry: &[EntityGeometry]) -> ChartResult<()> {
        let frame = self.frame_for(geometry);
        self.renderer.render(&frame)
    }

    fn frame_for(&self, geometry: &[EntityGeometry]) -> RenderFrame {
        let Some(layout) = &self.layout else {
            return RenderFrame::new(self.config.viewport);
        };
        let context = OverviewFrameContext {
            config: &self.config,
            data: &self.data,
            kind: self.kind,
            band_centers: layout
                .bands()
                .centers()
                .map(|(key, center)| (key.to_owned(), center))
                .collect(),
        };
        build_overview_frame(&context, geometry)
    }
}
