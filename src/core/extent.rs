use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Padding applied when every sample has the same value.
pub const DEGENERATE_PADDING: f64 = 10.0;
/// Fraction of the raw span added on each side of a non-degenerate extent.
pub const PADDING_RATIO: f64 = 0.05;
/// Upper clamp for series that stay within percentage range.
pub const PERCENT_CEILING: f64 = 100.0;

/// Closed `[min, max]` value span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Raw `[min, max]` of `accessor` over `data`, without padding.
pub fn raw_extent<T, F>(data: &[T], accessor: F) -> ChartResult<Extent>
where
    F: Fn(&T) -> f64,
{
    let mut values = data.iter().map(|item| OrderedFloat(accessor(item)));
    let first = values
        .next()
        .ok_or_else(|| ChartError::InvalidData("extent of empty data set".to_owned()))?;
    let (min, max) = values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    if !min.0.is_finite() || !max.0.is_finite() {
        return Err(ChartError::InvalidData(
            "extent values must be finite".to_owned(),
        ));
    }
    Ok(Extent::new(min.0, max.0))
}

/// Padded domain shared by both chart engines.
///
/// The heuristic assumes an axis is either a non-negative count or a 0..=100
/// percentage: non-negative data never pads below zero, and data that fits
/// under 100 never pads above it. A zero-width span gets a fixed padding of
/// `DEGENERATE_PADDING` so the resulting domain is never empty.
pub fn compute_extent<T, F>(data: &[T], accessor: F) -> ChartResult<Extent>
where
    F: Fn(&T) -> f64,
{
    let raw = raw_extent(data, accessor)?;
    Ok(pad_extent(raw))
}

#[must_use]
pub fn pad_extent(raw: Extent) -> Extent {
    let padding = if raw.min == raw.max {
        DEGENERATE_PADDING
    } else {
        PADDING_RATIO * raw.span()
    };

    let min = if raw.min >= 0.0 {
        (raw.min - padding).max(0.0)
    } else {
        raw.min - padding
    };
    let max = if raw.max <= PERCENT_CEILING {
        (raw.max + padding).min(PERCENT_CEILING)
    } else {
        raw.max + padding
    };

    Extent::new(min, max)
}

/// `[0, max]` over `accessor`, used for count series with a fixed baseline.
///
/// An empty data set yields `[0, 0]`.
#[must_use]
pub fn zero_based_extent<T, F>(data: &[T], accessor: F) -> Extent
where
    F: Fn(&T) -> u64,
{
    let max = data.iter().map(accessor).max().unwrap_or(0);
    Extent::new(0.0, max as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_minimum_is_padded_without_clamp() {
        let extent = compute_extent(&[-20.0, 20.0], |v: &f64| *v).expect("extent");
        assert_eq!(extent, Extent::new(-22.0, 22.0));
    }

    #[test]
    fn large_maximum_is_padded_without_clamp() {
        let extent = compute_extent(&[100.0, 300.0], |v: &f64| *v).expect("extent");
        assert_eq!(extent, Extent::new(90.0, 310.0));
    }

    #[test]
    fn zero_based_extent_ignores_minimum() {
        let extent = zero_based_extent(&[4_u64, 9, 2], |v| *v);
        assert_eq!(extent, Extent::new(0.0, 9.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(compute_extent(&[1.0, f64::NAN], |v: &f64| *v).is_err());
    }
}
