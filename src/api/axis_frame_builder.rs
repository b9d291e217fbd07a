use crate::core::PlotArea;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.12);
const PLOT_BACKGROUND: Color = Color::rgb(0.97, 0.97, 0.97);
const TICK_PADDING_PX: f64 = 3.0;
const OUTER_TICK_PX: f64 = 6.0;
const TITLE_OFFSET_PX: f64 = 40.0;

/// One labelled tick in plot-local pixels along its axis.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TickLabel {
    pub position: f64,
    pub text: String,
}

pub(super) fn push_plot_background(frame: &mut RenderFrame, plot: PlotArea) {
    frame.rects.push(RectPrimitive::new(
        plot.left,
        plot.top,
        plot.width,
        plot.height,
        PLOT_BACKGROUND,
    ));
}

/// Bottom axis with full-height gridlines and labels under the plot.
///
/// Ticks outside the plot width are skipped since they would be clipped.
pub(super) fn push_bottom_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    ticks: &[TickLabel],
    font_px: f64,
) {
    let baseline = plot.top + plot.height;
    frame.lines.push(LinePrimitive::new(
        plot.left,
        baseline,
        plot.left + plot.width,
        baseline,
        1.0,
        AXIS_COLOR,
    ));

    for tick in ticks.iter().filter(|tick| within(tick.position, plot.width)) {
        let x = plot.left + tick.position;
        frame
            .lines
            .push(LinePrimitive::new(x, plot.top, x, baseline, 1.0, GRID_COLOR));
        if tick.text.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            tick.text.clone(),
            x,
            baseline + TICK_PADDING_PX + 0.71 * font_px,
            font_px,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }
}

/// Vertical axis `offset_px` to the right of the plot with labels on its right.
pub(super) fn push_right_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    offset_px: f64,
    ticks: &[TickLabel],
    font_px: f64,
) {
    let axis_x = plot.left + plot.width + offset_px;
    frame.lines.push(LinePrimitive::new(
        axis_x,
        plot.top,
        axis_x,
        plot.top + plot.height,
        1.0,
        AXIS_COLOR,
    ));

    for tick in ticks.iter().filter(|tick| within(tick.position, plot.height)) {
        let y = plot.top + tick.position;
        frame.lines.push(LinePrimitive::new(
            axis_x,
            y,
            axis_x + OUTER_TICK_PX,
            y,
            1.0,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.text.clone(),
            axis_x + OUTER_TICK_PX + TICK_PADDING_PX,
            y + 0.32 * font_px,
            font_px,
            AXIS_COLOR,
            TextHAlign::Left,
        ));
    }
}

pub(super) fn push_bottom_title(
    frame: &mut RenderFrame,
    plot: PlotArea,
    title: &str,
    font_px: f64,
) {
    if title.is_empty() {
        return;
    }
    frame.texts.push(TextPrimitive::new(
        title,
        plot.left + plot.width / 2.0,
        plot.top + plot.height + TITLE_OFFSET_PX,
        font_px,
        AXIS_COLOR,
        TextHAlign::Center,
    ));
}

/// Title reading top to bottom, placed right of the right-hand axis.
pub(super) fn push_right_title(
    frame: &mut RenderFrame,
    plot: PlotArea,
    offset_px: f64,
    title: &str,
    font_px: f64,
) {
    if title.is_empty() {
        return;
    }
    frame.texts.push(
        TextPrimitive::new(
            title,
            plot.left + plot.width + offset_px,
            plot.top + plot.height * 0.6,
            font_px,
            AXIS_COLOR,
            TextHAlign::Center,
        )
        .rotated(90.0),
    );
}

fn within(position: f64, span: f64) -> bool {
    const EPSILON: f64 = 1e-6;
    position >= -EPSILON && position <= span + EPSILON
}
