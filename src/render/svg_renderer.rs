use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, ShapeLink,
    TextHAlign, TextPrimitive,
};

/// Renders frames into a standalone SVG document.
///
/// The renderer stands in for a mountable page node: every `render` call
/// discards the previous markup and writes the new frame from scratch.
/// Linked shapes become `<a>` elements carrying a `<title>` tooltip.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    surface_id: String,
    markup: String,
}

impl SvgRenderer {
    /// `surface_id` prefixes element ids so several charts can share a page.
    #[must_use]
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
            markup: String::new(),
        }
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// Markup of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" id="{}" width="{}" height="{}">"#,
            escape(self.surface_id.as_str()),
            frame.viewport.width,
            frame.viewport.height
        )?;

        for rect in &frame.rects {
            write_rect(&mut out, rect)?;
        }
        for line in &frame.lines {
            write_line(&mut out, line)?;
        }
        for text in &frame.texts {
            write_text(&mut out, text)?;
        }

        let body = &frame.body;
        if body.shape_count() > 0 {
            match body.clip {
                Some(clip) => {
                    let clip_id = format!("{}-clip", self.surface_id);
                    write!(
                        out,
                        r#"<defs><clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs><g clip-path="url(#{id})">"#,
                        num(clip.x),
                        num(clip.y),
                        num(clip.width),
                        num(clip.height),
                        id = escape(clip_id.as_str()),
                    )?;
                }
                None => out.push_str("<g>"),
            }
            for rect in &body.rects {
                write_linked(&mut out, &rect.link, |out| write_rect(out, rect))?;
            }
            for circle in &body.circles {
                write_linked(&mut out, &circle.link, |out| write_circle(out, circle))?;
            }
            for text in &body.texts {
                write_text(&mut out, text)?;
            }
            out.push_str("</g>");
        }

        out.push_str("</svg>");
        Ok(out)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new("chart")
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.markup = self
            .write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn write_linked<F>(out: &mut String, link: &ShapeLink, shape: F) -> std::fmt::Result
where
    F: FnOnce(&mut String) -> std::fmt::Result,
{
    if link.is_empty() {
        return shape(out);
    }
    match &link.href {
        Some(href) => write!(out, r#"<a xlink:href="{}">"#, escape(href.as_str()))?,
        None => out.push_str("<g>"),
    }
    if let Some(tooltip) = &link.tooltip {
        write!(out, "<title>{}</title>", escape(tooltip.as_str()))?;
    }
    shape(out)?;
    out.push_str(if link.href.is_some() { "</a>" } else { "</g>" });
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        fill(rect.fill_color)
    )
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        fill(circle.fill_color)
    )
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.stroke_width),
        opacity("stroke-opacity", line.color)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}px" text-anchor="{anchor}"{}"#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        fill(text.color)
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            num(text.rotation_deg),
            num(text.x),
            num(text.y)
        )?;
    }
    write!(out, ">{}</text>", escape(text.text.as_str()))
}

fn fill(color: Color) -> String {
    format!(
        r#" fill="{}"{}"#,
        color.to_hex(),
        opacity("fill-opacity", color)
    )
}

fn opacity(attribute: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {attribute}="{}""#, num(color.alpha))
    }
}

/// Pixel values rounded to 1/100 px; integral values print without decimals.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}
