use serde::{Deserialize, Serialize};

use crate::core::extent::Extent;
use crate::core::ticks::{linear_ticks, tick_precision, tick_step};
use crate::core::zoom::{ZoomAxis, ZoomTransform};
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a value domain onto a pixel range.
///
/// The range may be inverted (`[height, 0]`) so larger values sit higher on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    pub fn from_extent(extent: Extent, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(extent.as_tuple(), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round tick values across the current domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }

    /// Fractional digits needed to label `ticks(count)`.
    #[must_use]
    pub fn tick_precision(self, count: usize) -> u32 {
        tick_step(self.domain_start, self.domain_end, count)
            .map(tick_precision)
            .unwrap_or(0)
    }

    /// Scale whose domain is what this scale's range shows under `transform`.
    ///
    /// The range is left untouched: zooming in shrinks the visible domain
    /// while the plot keeps its pixel size.
    pub fn rescaled(self, transform: ZoomTransform, axis: ZoomAxis) -> ChartResult<Self> {
        let start = self.pixel_to_domain(transform.invert(self.range_start, axis))?;
        let end = self.pixel_to_domain(transform.invert(self.range_end, axis))?;
        Self::new((start, end), self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_maps_domain_end_to_top() {
        let scale = LinearScale::new((0.0, 100.0), (370.0, 0.0)).expect("scale");
        assert_eq!(scale.domain_to_pixel(100.0).expect("top"), 0.0);
        assert_eq!(scale.domain_to_pixel(0.0).expect("bottom"), 370.0);
    }

    #[test]
    fn zero_width_domain_is_rejected() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 10.0)).is_err());
    }
}
