use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot body for axes, titles and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(10.0, 150.0, 100.0, 100.0)
    }
}

/// Plot body rectangle in viewport pixels.
///
/// Chart geometry is computed in plot-local coordinates (origin at the
/// top-left of the body) and translated by `left`/`top` when a frame is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: f64::from(viewport.width) - margins.left - margins.right,
            height: f64::from(viewport.height) - margins.top - margins.bottom,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Identifier of a backend record.
///
/// Backends send either object-id strings or plain numbers; both are kept as
/// text since the key is only ever echoed back into links and labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self(text),
            Repr::Number(number) => Self(number.to_string()),
        })
    }
}

/// One assignment/submission pair plotted on the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Alternate y-value shown only while outlier display is enabled.
    #[serde(default)]
    pub outlier: Option<f64>,
    pub key: RecordKey,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub project: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            outlier: None,
            key: RecordKey::new(key),
            user: String::new(),
            project: String::new(),
        }
    }

    #[must_use]
    pub fn with_outlier(mut self, outlier: f64) -> Self {
        self.outlier = Some(outlier);
        self
    }

    #[must_use]
    pub fn with_owner(mut self, user: impl Into<String>, project: impl Into<String>) -> Self {
        self.user = user.into();
        self.project = project.into();
        self
    }

    #[must_use]
    pub fn is_outlier(&self) -> bool {
        self.outlier.is_some()
    }

    /// Y-value used for placement given the current outlier toggle.
    #[must_use]
    pub fn effective_y(&self, show_outliers: bool) -> f64 {
        match self.outlier {
            Some(outlier) if show_outliers => outlier,
            _ => self.y,
        }
    }
}

/// Per-entity activity counts for the overview chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewDatum {
    pub key: RecordKey,
    pub submissions: u64,
    pub snapshots: u64,
    pub launches: u64,
}

impl OverviewDatum {
    #[must_use]
    pub fn new(key: impl Into<String>, submissions: u64, snapshots: u64, launches: u64) -> Self {
        Self {
            key: RecordKey::new(key),
            submissions,
            snapshots,
            launches,
        }
    }

    #[must_use]
    pub fn count(&self, category: CountCategory) -> u64 {
        match category {
            CountCategory::Submissions => self.submissions,
            CountCategory::Snapshots => self.snapshots,
            CountCategory::Launches => self.launches,
        }
    }
}

/// The three activity series drawn per overview entity, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountCategory {
    Submissions,
    Snapshots,
    Launches,
}

impl CountCategory {
    pub const ALL: [Self; 3] = [Self::Submissions, Self::Snapshots, Self::Launches];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Submissions => 0,
            Self::Snapshots => 1,
            Self::Launches => 2,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Submissions => "Submissions",
            Self::Snapshots => "Snapshots",
            Self::Launches => "Launches",
        }
    }

    /// Lower-case noun used in bar tooltips (`"12 snapshots"`).
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Submissions => "submissions",
            Self::Snapshots => "snapshots",
            Self::Launches => "launches",
        }
    }
}

/// Human-readable axis title plus an optional unit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AxisSpec {
    pub label: String,
    #[serde(default)]
    pub unit: String,
}

impl AxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
        }
    }

    /// `"Score (%)"`, or just `"Score"` when the unit is empty.
    #[must_use]
    pub fn title(&self) -> String {
        if self.unit.is_empty() {
            self.label.clone()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }

    /// `"90 %"`, or just `"90"` when the unit is empty.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        if self.unit.is_empty() {
            format!("{value}")
        } else {
            format!("{value} {}", self.unit)
        }
    }
}

/// What a chart groups its records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Project,
    User,
}

impl EntityKind {
    /// Wire name used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::User => "user",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::User => "User",
        }
    }
}
