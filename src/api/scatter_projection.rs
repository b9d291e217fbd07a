use serde::{Deserialize, Serialize};

use crate::core::{
    DataPoint, Interpolate, LinearScale, PlotArea, ZoomAxis, ZoomTransform, compute_extent,
};
use crate::error::ChartResult;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// X and Y scales of one scatter draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScatterScales {
    /// Fits both domains to `points` and maps them onto the plot body.
    ///
    /// The y domain is computed from the effective y-value, so toggling
    /// outliers changes the domain and not just marker positions.
    pub fn fit(points: &[DataPoint], show_outliers: bool, plot: PlotArea) -> ChartResult<Self> {
        let x_extent = compute_extent(points, |point| point.x)?;
        let y_extent = compute_extent(points, |point| point.effective_y(show_outliers))?;
        Ok(Self {
            x: LinearScale::from_extent(x_extent, (0.0, plot.width))?,
            y: LinearScale::from_extent(y_extent, (plot.height, 0.0))?,
        })
    }

    /// Scales showing what `self` shows once `transform` is applied.
    pub fn zoomed(self, transform: ZoomTransform) -> ChartResult<Self> {
        if transform.is_identity() {
            return Ok(self);
        }
        Ok(Self {
            x: self.x.rescaled(transform, ZoomAxis::X)?,
            y: self.y.rescaled(transform, ZoomAxis::Y)?,
        })
    }
}

/// Marker center in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    pub x: f64,
    pub y: f64,
}

impl Interpolate for MarkerGeometry {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&target.x, t),
            y: self.y.interpolate(&target.y, t),
        }
    }
}

/// Axis tick value and its plot-local pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
}

impl Interpolate for AxisTick {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            value: target.value,
            position: self.position.interpolate(&target.position, t),
        }
    }
}

/// Everything on the scatter chart that moves when the scales change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterProjection {
    pub markers: Vec<MarkerGeometry>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_precision: u32,
    pub y_precision: u32,
}

impl ScatterProjection {
    pub fn build(
        points: &[DataPoint],
        scales: ScatterScales,
        show_outliers: bool,
        tick_counts: (usize, usize),
    ) -> ChartResult<Self> {
        let (x_count, y_count) = tick_counts;
        Ok(Self {
            markers: project_markers(points, scales, show_outliers)?,
            x_ticks: project_ticks(scales.x, &scales.x.ticks(x_count))?,
            y_ticks: project_ticks(scales.y, &scales.y.ticks(y_count))?,
            x_precision: scales.x.tick_precision(x_count),
            y_precision: scales.y.tick_precision(y_count),
        })
    }

    /// Start state for animating towards `self` from `previous` scales.
    ///
    /// Markers start where they are currently shown; ticks are this
    /// projection's tick values placed by the previous scales, so every tick
    /// slides from its old position to its new one.
    pub fn rebased(
        &self,
        current_markers: &[MarkerGeometry],
        previous: ScatterScales,
    ) -> ChartResult<Self> {
        let x_values: Vec<f64> = self.x_ticks.iter().map(|tick| tick.value).collect();
        let y_values: Vec<f64> = self.y_ticks.iter().map(|tick| tick.value).collect();
        Ok(Self {
            markers: current_markers.to_vec(),
            x_ticks: project_ticks(previous.x, &x_values)?,
            y_ticks: project_ticks(previous.y, &y_values)?,
            x_precision: self.x_precision,
            y_precision: self.y_precision,
        })
    }
}

impl Interpolate for ScatterProjection {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            markers: self.markers.interpolate(&target.markers, t),
            x_ticks: self.x_ticks.interpolate(&target.x_ticks, t),
            y_ticks: self.y_ticks.interpolate(&target.y_ticks, t),
            x_precision: target.x_precision,
            y_precision: target.y_precision,
        }
    }
}

/// Places one marker per point at `(sx(x), sy(effective_y))`.
pub fn project_markers(
    points: &[DataPoint],
    scales: ScatterScales,
    show_outliers: bool,
) -> ChartResult<Vec<MarkerGeometry>> {
    let project = |point: &DataPoint| -> ChartResult<MarkerGeometry> {
        Ok(MarkerGeometry {
            x: scales.x.domain_to_pixel(point.x)?,
            y: scales.y.domain_to_pixel(point.effective_y(show_outliers))?,
        })
    };

    #[cfg(feature = "parallel-projection")]
    {
        points.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points.iter().map(project).collect()
    }
}

fn project_ticks(scale: LinearScale, values: &[f64]) -> ChartResult<Vec<AxisTick>> {
    values
        .iter()
        .map(|&value| {
            Ok(AxisTick {
                value,
                position: scale.domain_to_pixel(value)?,
            })
        })
        .collect()
}
