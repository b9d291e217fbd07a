use serde::{Deserialize, Serialize};

use crate::core::{
    BandScale, CountCategory, Interpolate, LinearScale, OverviewDatum, PlotArea, zero_based_extent,
};
use crate::error::ChartResult;
use crate::interaction::LayoutMode;

/// One bar in plot-local pixels; `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }
}

impl Interpolate for BarGeometry {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&target.x, t),
            y: self.y.interpolate(&target.y, t),
            width: self.width.interpolate(&target.width, t),
            height: self.height.interpolate(&target.height, t),
        }
    }
}

/// Baseline anchor of a count label, horizontally centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

impl Interpolate for LabelAnchor {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&target.x, t),
            y: self.y.interpolate(&target.y, t),
        }
    }
}

/// Bars and labels of one entity, indexed by `CountCategory::index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityGeometry {
    pub bars: [BarGeometry; 3],
    pub labels: [LabelAnchor; 3],
}

impl EntityGeometry {
    #[must_use]
    pub fn bar(&self, category: CountCategory) -> BarGeometry {
        self.bars[category.index()]
    }

    #[must_use]
    pub fn label(&self, category: CountCategory) -> LabelAnchor {
        self.labels[category.index()]
    }

    /// Total bar area; the same in both layouts.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.bars.iter().map(|bar| bar.area()).sum()
    }
}

impl Interpolate for EntityGeometry {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        Self {
            bars: self.bars.interpolate(&target.bars, t),
            labels: self.labels.interpolate(&target.labels, t),
        }
    }
}

/// Geometry of every entity, in data order.
pub type OverviewGeometry = Vec<EntityGeometry>;

/// Per-category count maxima; each category has its own `[0, max]` domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDomains {
    maxima: [f64; 3],
}

impl CategoryDomains {
    #[must_use]
    pub fn fit(data: &[OverviewDatum]) -> Self {
        Self {
            maxima: CountCategory::ALL
                .map(|category| zero_based_extent(data, |datum| datum.count(category)).max),
        }
    }

    #[must_use]
    pub fn max(&self, category: CountCategory) -> f64 {
        self.maxima[category.index()]
    }

    /// Bar height of `count` when the category spans `[0, span_px]`.
    ///
    /// A category whose counts are all zero draws every bar at height zero.
    fn height(&self, category: CountCategory, count: u64, span_px: f64) -> ChartResult<f64> {
        let max = self.max(category);
        if max <= 0.0 {
            return Ok(0.0);
        }
        LinearScale::new((0.0, max), (0.0, span_px))?.domain_to_pixel(count as f64)
    }
}

/// Band placement plus category domains for one overview dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewLayout {
    bands: BandScale,
    domains: CategoryDomains,
    plot_height: f64,
    group_buffer_px: f64,
    label_gap_px: f64,
}

impl OverviewLayout {
    pub fn new(
        data: &[OverviewDatum],
        plot: PlotArea,
        group_buffer_px: f64,
        label_gap_px: f64,
    ) -> ChartResult<Self> {
        Ok(Self {
            bands: BandScale::new(data.iter().map(|datum| datum.key.as_str()), plot.width)?,
            domains: CategoryDomains::fit(data),
            plot_height: plot.height,
            group_buffer_px,
            label_gap_px,
        })
    }

    #[must_use]
    pub fn bands(&self) -> &BandScale {
        &self.bands
    }

    #[must_use]
    pub fn domains(&self) -> CategoryDomains {
        self.domains
    }

    /// Band width left for bars after the buffer on both sides.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.bands.bandwidth() - 2.0 * self.group_buffer_px).max(0.0)
    }

    /// Vertical pixel span of every category in `mode`.
    #[must_use]
    pub fn category_span(&self, mode: LayoutMode) -> f64 {
        match mode {
            LayoutMode::Stacked => self.plot_height / 3.0,
            LayoutMode::Grouped => self.plot_height,
        }
    }

    pub fn geometry(
        &self,
        data: &[OverviewDatum],
        mode: LayoutMode,
    ) -> ChartResult<OverviewGeometry> {
        data.iter()
            .map(|datum| self.entity_geometry(datum, mode))
            .collect()
    }

    pub fn entity_geometry(
        &self,
        datum: &OverviewDatum,
        mode: LayoutMode,
    ) -> ChartResult<EntityGeometry> {
        let band_x = self.bands.position(datum.key.as_str()).unwrap_or(0.0);
        let left = band_x + self.group_buffer_px;
        let inner = self.inner_width();
        let span = self.category_span(mode);

        let mut heights = [0.0; 3];
        for category in CountCategory::ALL {
            heights[category.index()] = self.domains.height(category, datum.count(category), span)?;
        }

        let mut baseline = self.plot_height;
        let bars = CountCategory::ALL.map(|category| {
            let height = heights[category.index()];
            match mode {
                LayoutMode::Stacked => {
                    let bar = BarGeometry {
                        x: left,
                        y: baseline - height,
                        width: inner,
                        height,
                    };
                    baseline -= height;
                    bar
                }
                LayoutMode::Grouped => {
                    let width = inner / 3.0;
                    BarGeometry {
                        x: left + category.index() as f64 * width,
                        y: self.plot_height - height,
                        width,
                        height,
                    }
                }
            }
        });
        let labels = bars.map(|bar| LabelAnchor {
            x: bar.center_x(),
            y: bar.y - self.label_gap_px,
        });
        Ok(EntityGeometry { bars, labels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> PlotArea {
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 300.0,
            height: 300.0,
        }
    }

    #[test]
    fn stacked_bars_sit_on_each_other() {
        let data = vec![OverviewDatum::new("p", 10, 10, 10)];
        let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");
        let entity = layout
            .entity_geometry(&data[0], LayoutMode::Stacked)
            .expect("geometry");
        assert_eq!(entity.bars[0].y, 200.0);
        assert_eq!(entity.bars[1].y + entity.bars[1].height, entity.bars[0].y);
        assert_eq!(entity.bars[2].y, 0.0);
        assert_eq!(entity.bars[0].width, 290.0);
    }

    #[test]
    fn grouped_bars_share_the_baseline() {
        let data = vec![OverviewDatum::new("p", 10, 5, 0)];
        let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");
        let entity = layout
            .entity_geometry(&data[0], LayoutMode::Grouped)
            .expect("geometry");
        for bar in entity.bars {
            assert_eq!(bar.y + bar.height, 300.0);
        }
        assert_eq!(entity.bars[2].height, 0.0);
        assert_eq!(entity.labels[0].y, -2.0);
    }
}
