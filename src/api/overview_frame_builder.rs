use crate::core::{CountCategory, EntityKind, OverviewDatum};
use crate::render::{Color, RectPrimitive, RenderFrame, ShapeLink, TextHAlign, TextPrimitive};

use super::axis_frame_builder::{
    TickLabel, push_bottom_axis, push_bottom_title, push_plot_background,
};
use super::{EntityGeometry, OverviewChartConfig};

const LEGEND_SWATCH_PX: f64 = 15.0;
const LEGEND_ROW_PX: f64 = 20.0;
const LEGEND_TOP_PX: f64 = 50.0;
const LEGEND_TEXT_OFFSET_PX: f64 = 20.0;
const LABEL_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);

/// Category10 fill of each count series.
#[must_use]
pub fn category_color(category: CountCategory) -> Color {
    match category {
        CountCategory::Submissions => Color::rgb8(0x1f, 0x77, 0xb4),
        CountCategory::Snapshots => Color::rgb8(0xff, 0x7f, 0x0e),
        CountCategory::Launches => Color::rgb8(0x2c, 0xa0, 0x2c),
    }
}

/// `"<key>\n<count> <category>"` hover text of one bar.
#[must_use]
pub fn bar_tooltip(datum: &OverviewDatum, category: CountCategory) -> String {
    format!("{}\n{} {}", datum.key, datum.count(category), category.noun())
}

pub(super) struct OverviewFrameContext<'a> {
    pub config: &'a OverviewChartConfig,
    pub data: &'a [OverviewDatum],
    pub kind: EntityKind,
    /// Band centers in plot-local pixels, in band order.
    pub band_centers: Vec<(String, f64)>,
}

pub(super) fn build_overview_frame(
    context: &OverviewFrameContext<'_>,
    geometry: &[EntityGeometry],
) -> RenderFrame {
    let config = context.config;
    let plot = config.plot_area();
    let mut frame = RenderFrame::new(config.viewport);

    push_plot_background(&mut frame, plot);
    let ticks: Vec<TickLabel> = context
        .band_centers
        .iter()
        .map(|(key, center)| TickLabel {
            position: *center,
            text: key.clone(),
        })
        .collect();
    push_bottom_axis(&mut frame, plot, &ticks, config.tick_font_px);
    push_bottom_title(&mut frame, plot, context.kind.title(), config.title_font_px);
    push_legend(&mut frame, config);

    for (datum, entity) in context.data.iter().zip(geometry) {
        let href = config.entity_link(context.kind, datum.key.as_str());
        for category in CountCategory::ALL {
            let bar = entity.bar(category);
            let color = category_color(category);
            frame.body.rects.push(
                RectPrimitive::new(
                    plot.left + bar.x,
                    plot.top + bar.y,
                    bar.width,
                    bar.height,
                    color,
                )
                .with_link(ShapeLink::new(href.clone(), bar_tooltip(datum, category))),
            );

            let label = entity.label(category);
            frame.body.texts.push(TextPrimitive::new(
                datum.count(category).to_string(),
                plot.left + label.x,
                plot.top + label.y,
                config.label_font_px,
                LABEL_COLOR,
                TextHAlign::Center,
            ));
        }
    }

    frame
}

/// Swatch and title per category, down the left margin.
fn push_legend(frame: &mut RenderFrame, config: &OverviewChartConfig) {
    let x = 0.0;
    for category in CountCategory::ALL {
        let row = category.index() as f64 * LEGEND_ROW_PX;
        frame.rects.push(RectPrimitive::new(
            x,
            config.margins.top + LEGEND_TOP_PX + row,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            category_color(category),
        ));
        frame.texts.push(TextPrimitive::new(
            category.title(),
            x + LEGEND_TEXT_OFFSET_PX,
            config.margins.top + LEGEND_TOP_PX + row + 10.0,
            config.legend_font_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
}
