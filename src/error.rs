use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A response payload lacks a field the chart needs.
    ///
    /// Engines treat this as "nothing to show" and clear their surface
    /// instead of propagating it.
    #[error("missing data: `{field}`")]
    MissingData { field: String },

    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl ChartError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingData {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingData { .. })
    }
}
