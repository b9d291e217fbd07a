use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Axis-aligned clip region in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Data-driven shapes drawn inside the plot body, optionally clipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyLayer {
    pub clip: Option<ClipRect>,
    pub circles: Vec<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl BodyLayer {
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.circles.len() + self.rects.len() + self.texts.len()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Chrome (`lines`, `rects`, `texts`: plot background, axes, titles, legend)
/// is drawn first, then the `body` layer on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub body: BodyLayer,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            body: BodyLayer::default(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_clip(mut self, clip: ClipRect) -> Self {
        self.body.clip = Some(clip);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in self.rects.iter().chain(&self.body.rects) {
            rect.validate()?;
        }
        for circle in &self.body.circles {
            circle.validate()?;
        }
        for text in self.texts.iter().chain(&self.body.texts) {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len() + self.body.shape_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }
}
