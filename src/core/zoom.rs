use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomAxis {
    X,
    Y,
}

/// Uniform pan/zoom transform in plot pixels: `p' = k * p + t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn new(k: f64, x: f64, y: f64) -> ChartResult<Self> {
        let transform = Self { k, x, y };
        transform.validate()?;
        Ok(transform)
    }

    /// Pure translation by `(dx, dy)` pixels.
    #[must_use]
    pub fn translate(dx: f64, dy: f64) -> Self {
        Self { k: 1.0, x: dx, y: dy }
    }

    /// Zoom by `factor` keeping the pixel `(anchor_x, anchor_y)` fixed.
    #[must_use]
    pub fn scale_about(factor: f64, anchor_x: f64, anchor_y: f64) -> Self {
        Self {
            k: factor,
            x: anchor_x * (1.0 - factor),
            y: anchor_y * (1.0 - factor),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Transform equivalent to applying `self` and then `delta`.
    #[must_use]
    pub fn then(self, delta: Self) -> Self {
        Self {
            k: delta.k * self.k,
            x: delta.k * self.x + delta.x,
            y: delta.k * self.y + delta.y,
        }
    }

    #[must_use]
    pub fn apply(self, pixel: f64, axis: ZoomAxis) -> f64 {
        pixel * self.k + self.offset(axis)
    }

    #[must_use]
    pub fn invert(self, pixel: f64, axis: ZoomAxis) -> f64 {
        (pixel - self.offset(axis)) / self.k
    }

    fn offset(self, axis: ZoomAxis) -> f64 {
        match axis {
            ZoomAxis::X => self.x,
            ZoomAxis::Y => self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_about_keeps_anchor_fixed() {
        let transform = ZoomTransform::scale_about(2.0, 100.0, 50.0);
        assert_eq!(transform.apply(100.0, ZoomAxis::X), 100.0);
        assert_eq!(transform.apply(50.0, ZoomAxis::Y), 50.0);
    }

    #[test]
    fn then_composes_in_application_order() {
        let pan = ZoomTransform::translate(10.0, 0.0);
        let zoom = ZoomTransform::scale_about(2.0, 0.0, 0.0);
        let combined = pan.then(zoom);
        assert_eq!(combined.apply(5.0, ZoomAxis::X), 30.0);
        assert_eq!(combined.invert(30.0, ZoomAxis::X), 5.0);
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        assert!(ZoomTransform::new(0.0, 0.0, 0.0).is_err());
    }
}
