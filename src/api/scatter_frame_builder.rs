use crate::core::{AxisSpec, DataPoint, EntityKind, format_tick};
use crate::render::{
    CirclePrimitive, ClipRect, Color, RenderFrame, ShapeLink, TextHAlign, TextPrimitive,
};

use super::axis_frame_builder::{
    TickLabel, push_bottom_axis, push_bottom_title, push_plot_background, push_right_axis,
    push_right_title,
};
use super::{ScatterChartConfig, ScatterProjection, ScatterTooltip};

/// Distance from the plot edge to the rotated y title.
const Y_TITLE_OFFSET_PX: f64 = 120.0;

/// Inputs of one scatter frame besides the moving geometry.
pub(super) struct ScatterFrameContext<'a> {
    pub config: &'a ScatterChartConfig,
    pub points: &'a [DataPoint],
    pub axis_x: &'a AxisSpec,
    pub axis_y: &'a AxisSpec,
    pub grouping: EntityKind,
    pub show_outliers: bool,
}

/// Marker color: outliers stay red whether or not they are shown at their
/// outlier position.
#[must_use]
pub fn marker_color(point: &DataPoint) -> Color {
    if point.is_outlier() {
        Color::RED
    } else {
        Color::BLACK
    }
}

/// Caption drawn above a marker: whichever of user/project is not the
/// chart's grouping.
#[must_use]
pub fn marker_caption(point: &DataPoint, grouping: EntityKind) -> &str {
    match grouping {
        EntityKind::Project => &point.user,
        EntityKind::User => &point.project,
    }
}

pub(super) fn build_scatter_frame(
    context: &ScatterFrameContext<'_>,
    projection: &ScatterProjection,
) -> RenderFrame {
    let config = context.config;
    let plot = config.plot_area();
    let mut frame = RenderFrame::new(config.viewport);

    push_plot_background(&mut frame, plot);

    let x_ticks: Vec<TickLabel> = projection
        .x_ticks
        .iter()
        .map(|tick| TickLabel {
            position: tick.position,
            text: format_tick(tick.value, projection.x_precision),
        })
        .collect();
    push_bottom_axis(&mut frame, plot, &x_ticks, config.tick_font_px);
    push_bottom_title(
        &mut frame,
        plot,
        &context.axis_x.title(),
        config.title_font_px,
    );

    let y_ticks: Vec<TickLabel> = projection
        .y_ticks
        .iter()
        .map(|tick| TickLabel {
            position: tick.position,
            text: format_tick(tick.value, projection.y_precision),
        })
        .collect();
    push_right_axis(
        &mut frame,
        plot,
        config.y_axis_offset_px,
        &y_ticks,
        config.tick_font_px,
    );
    push_right_title(
        &mut frame,
        plot,
        Y_TITLE_OFFSET_PX,
        &context.axis_y.title(),
        config.title_font_px,
    );

    let pad = config.clip_padding_px;
    frame.body.clip = Some(ClipRect::new(
        plot.left - pad,
        plot.top - pad,
        plot.width + 2.0 * pad,
        plot.height + 2.0 * pad,
    ));

    for (point, marker) in context.points.iter().zip(&projection.markers) {
        let cx = plot.left + marker.x;
        let cy = plot.top + marker.y;
        let color = marker_color(point);
        let tooltip = ScatterTooltip::for_point(
            point,
            context.axis_x,
            context.axis_y,
            context.show_outliers,
        );
        frame.body.circles.push(
            CirclePrimitive::new(cx, cy, config.marker_radius_px, color).with_link(
                ShapeLink::new(
                    config.submission_link(point.key.as_str()),
                    tooltip.to_text(),
                ),
            ),
        );

        let caption = marker_caption(point, context.grouping);
        if !caption.is_empty() {
            frame.body.texts.push(TextPrimitive::new(
                caption,
                cx,
                cy - config.caption_font_px,
                config.caption_font_px,
                color,
                TextHAlign::Center,
            ));
        }
    }

    frame
}
