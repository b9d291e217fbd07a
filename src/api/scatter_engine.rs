use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{AxisSpec, DataPoint, EntityKind, Transition, ZoomTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{PresentationInput, PresentationState};
use crate::render::{RenderFrame, Renderer};

use super::scatter_frame_builder::{ScatterFrameContext, build_scatter_frame};
use super::{MarkerGeometry, ScatterChartConfig, ScatterPayload, ScatterProjection, ScatterScales};

/// Data snapshot the scatter chart was last asked to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterDataset {
    pub points: Vec<DataPoint>,
    pub axis_x: AxisSpec,
    pub axis_y: AxisSpec,
    pub grouping: EntityKind,
}

/// Zoomable per-assignment scatter chart.
///
/// Every draw recomputes domains, then scales, then marker placement from
/// the stored dataset and the current `PresentationState`.
pub struct ScatterChartEngine<R: Renderer> {
    renderer: R,
    config: ScatterChartConfig,
    presentation: PresentationState,
    dataset: Option<ScatterDataset>,
    base_scales: Option<ScatterScales>,
    zoom: ZoomTransform,
    projection: Option<ScatterProjection>,
    animation: Option<Transition<ScatterProjection>>,
}

impl<R: Renderer> ScatterChartEngine<R> {
    pub fn new(renderer: R, config: ScatterChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            presentation: PresentationState::default(),
            dataset: None,
            base_scales: None,
            zoom: ZoomTransform::IDENTITY,
            projection: None,
            animation: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.config
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationState {
        self.presentation
    }

    #[must_use]
    pub fn show_outliers(&self) -> bool {
        self.presentation.show_outliers()
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&ScatterDataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        self.zoom
    }

    /// Scales currently on screen (render-time scales under the zoom).
    pub fn current_scales(&self) -> ChartResult<Option<ScatterScales>> {
        self.base_scales
            .map(|scales| scales.zoomed(self.zoom))
            .transpose()
    }

    /// Projection the chart shows, or animates towards.
    #[must_use]
    pub fn projection(&self) -> Option<&ScatterProjection> {
        self.projection.as_ref()
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

    /// Draws `points` from scratch and resets the zoom.
    ///
    /// An empty point set clears the surface and draws nothing.
    pub fn render(
        &mut self,
        points: Vec<DataPoint>,
        axis_x: AxisSpec,
        axis_y: AxisSpec,
        grouping: EntityKind,
    ) -> ChartResult<()> {
        self.dataset = Some(ScatterDataset {
            points,
            axis_x,
            axis_y,
            grouping,
        });
        self.redraw()
    }

    /// Decodes a `chart-data` response and draws it.
    ///
    /// A response without `chart-data` or `chart-info` is not an error: the
    /// surface is cleared and nothing is drawn.
    pub fn render_payload(&mut self, payload: &Value, grouping: EntityKind) -> ChartResult<()> {
        match ScatterPayload::from_value(payload) {
            Ok(payload) => {
                let axis_x = payload.info.axis_x();
                let axis_y = payload.info.axis_y();
                self.render(payload.points, axis_x, axis_y, grouping)
            }
            Err(ChartError::MissingData { field }) => {
                debug!(field = %field, "scatter payload incomplete; clearing chart");
                self.clear()
            }
            Err(err) => Err(err),
        }
    }

    /// Forgets the dataset and leaves an empty surface.
    pub fn clear(&mut self) -> ChartResult<()> {
        self.dataset = None;
        self.redraw()
    }

    /// Flips outlier display and redraws with freshly fitted domains.
    ///
    /// Returns the new outlier flag.
    pub fn toggle_outliers(&mut self) -> ChartResult<bool> {
        let show = self.presentation.toggle_outliers();
        debug!(show_outliers = show, "toggle scatter outliers");
        self.redraw()?;
        Ok(show)
    }

    pub fn handle_input(&mut self, input: PresentationInput) -> ChartResult<()> {
        match input {
            PresentationInput::OutlierCheckboxClicked => self.toggle_outliers().map(|_| ()),
            PresentationInput::ChartBodyClicked => Ok(()),
        }
    }

    /// Applies a pan/zoom step and starts animating towards the new
    /// projection.
    ///
    /// Only coordinates change: data, domains fitted at render time and the
    /// outlier state are reused as they are.
    pub fn on_zoom(&mut self, delta: ZoomTransform) -> ChartResult<()> {
        delta.validate()?;
        let (Some(dataset), Some(base), Some(projection)) =
            (&self.dataset, self.base_scales, &self.projection)
        else {
            return Ok(());
        };

        let previous = base.zoomed(self.zoom)?;
        let zoom = self.zoom.then(delta);
        let scales = base.zoomed(zoom)?;
        let target = ScatterProjection::build(
            &dataset.points,
            scales,
            self.presentation.show_outliers(),
            (self.config.x_tick_count, self.config.y_tick_count),
        )?;

        let shown_markers: Vec<MarkerGeometry> = match &self.animation {
            Some(animation) => animation.current().markers,
            None => projection.markers.clone(),
        };
        let start = target.rebased(&shown_markers, previous)?;
        let transition = Transition::new(
            start,
            target.clone(),
            self.config.zoom_duration_ms,
            self.config.zoom_easing,
        )?;

        debug!(
            k = zoom.k,
            x = zoom.x,
            y = zoom.y,
            x_domain = ?scales.x.domain(),
            y_domain = ?scales.y.domain(),
            "zoom scatter chart"
        );
        self.zoom = zoom;
        self.projection = Some(target);
        self.animation = Some(transition);
        self.advance_animation(0.0).map(|_| ())
    }

    /// Draws the running animation at `elapsed_ms` since it started.
    ///
    /// Returns `true` while frames remain. Without an animation this is a
    /// no-op returning `false`.
    pub fn advance_animation(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(false);
        };
        let frame_projection = animation.sample(elapsed_ms);
        let finished = animation.is_finished();
        trace!(elapsed_ms, finished, "advance scatter animation");
        if finished {
            self.animation = None;
        }
        self.draw_projection(&frame_projection)?;
        Ok(!finished)
    }

    /// Jumps the running animation, if any, to its final frame.
    pub fn finish_animation(&mut self) -> ChartResult<()> {
        if let Some(duration_ms) = self.animation.as_ref().map(Transition::duration_ms) {
            self.advance_animation(duration_ms)?;
        }
        Ok(())
    }

    /// Frame for the current state without touching the renderer.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let projection = match &self.animation {
            Some(animation) => Some(animation.current()),
            None => self.projection.clone(),
        };
        match (&self.dataset, projection) {
            (Some(dataset), Some(projection)) => {
                build_scatter_frame(&self.frame_context(dataset), &projection)
            }
            _ => RenderFrame::new(self.config.viewport),
        }
    }

    fn redraw(&mut self) -> ChartResult<()> {
        self.zoom = ZoomTransform::IDENTITY;
        self.animation = None;
        self.base_scales = None;
        self.projection = None;

        let Some(dataset) = self.dataset.as_ref().filter(|data| !data.points.is_empty()) else {
            debug!("scatter chart has no points; clearing surface");
            return self.renderer.render(&RenderFrame::new(self.config.viewport));
        };

        let show_outliers = self.presentation.show_outliers();
        let scales = ScatterScales::fit(&dataset.points, show_outliers, self.config.plot_area())?;
        let projection = ScatterProjection::build(
            &dataset.points,
            scales,
            show_outliers,
            (self.config.x_tick_count, self.config.y_tick_count),
        )?;
        debug!(
            points = dataset.points.len(),
            show_outliers,
            x_domain = ?scales.x.domain(),
            y_domain = ?scales.y.domain(),
            "render scatter chart"
        );

        self.base_scales = Some(scales);
        self.projection = Some(projection.clone());
        self.draw_projection(&projection)
    }

    fn draw_projection(&mut self, projection: &ScatterProjection) -> ChartResult<()> {
        let frame = match &self.dataset {
            Some(dataset) => build_scatter_frame(&self.frame_context(dataset), projection),
            None => RenderFrame::new(self.config.viewport),
        };
        self.renderer.render(&frame)
    }

    fn frame_context<'a>(&'a self, dataset: &'a ScatterDataset) -> ScatterFrameContext<'a> {
        ScatterFrameContext {
            config: &self.config,
            points: &dataset.points,
            axis_x: &dataset.axis_x,
            axis_y: &dataset.axis_y,
            grouping: dataset.grouping,
            show_outliers: self.presentation.show_outliers(),
        }
    }
}
