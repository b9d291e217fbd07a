use serde::{Deserialize, Serialize};

/// Arrangement of the three per-entity bars on the overview chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutMode {
    /// Submissions at the baseline with snapshots and launches on top.
    #[default]
    Stacked,
    /// Three narrower bars side by side, each on the baseline.
    Grouped,
}

impl LayoutMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Grouped,
            Self::Grouped => Self::Stacked,
        }
    }
}

/// User-controlled presentation flags, kept apart from chart data.
///
/// Engines own one of these and consult it on every draw, so a frame is a
/// pure function of `(data, PresentationState)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PresentationState {
    show_outliers: bool,
    layout_mode: LayoutMode,
}

impl PresentationState {
    #[must_use]
    pub fn new(show_outliers: bool, layout_mode: LayoutMode) -> Self {
        Self {
            show_outliers,
            layout_mode,
        }
    }

    #[must_use]
    pub fn show_outliers(self) -> bool {
        self.show_outliers
    }

    #[must_use]
    pub fn layout_mode(self) -> LayoutMode {
        self.layout_mode
    }

    /// Flips outlier display and returns the new value.
    pub fn toggle_outliers(&mut self) -> bool {
        self.show_outliers = !self.show_outliers;
        self.show_outliers
    }

    /// Flips the bar layout and returns the new mode.
    pub fn toggle_layout(&mut self) -> LayoutMode {
        self.layout_mode = self.layout_mode.toggled();
        self.layout_mode
    }
}

/// The only user inputs that mutate `PresentationState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationInput {
    /// The outlier-visibility checkbox next to the scatter chart was clicked.
    OutlierCheckboxClicked,
    /// The overview bar chart body was clicked.
    ChartBodyClicked,
}
