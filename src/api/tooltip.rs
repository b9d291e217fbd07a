use serde::{Deserialize, Serialize};

use crate::core::{AxisSpec, DataPoint};

/// One `label: value` line of a tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

/// Hover content of one scatter marker.
///
/// The y row shows the value the marker is placed at, so it follows the
/// outlier toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterTooltip {
    pub heading: String,
    pub rows: [TooltipRow; 2],
}

impl ScatterTooltip {
    #[must_use]
    pub fn for_point(
        point: &DataPoint,
        axis_x: &AxisSpec,
        axis_y: &AxisSpec,
        show_outliers: bool,
    ) -> Self {
        Self {
            heading: format!("{}'s {}", point.user, point.project),
            rows: [
                TooltipRow {
                    label: axis_y.label.clone(),
                    value: axis_y.format_value(point.effective_y(show_outliers)),
                },
                TooltipRow {
                    label: axis_x.label.clone(),
                    value: axis_x.format_value(point.x),
                },
            ],
        }
    }

    /// Plain-text form used as an SVG `<title>`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = self.heading.clone();
        for row in &self.rows {
            text.push('\n');
            text.push_str(&row.label);
            text.push_str(": ");
            text.push_str(&row.value);
        }
        text
    }
}
