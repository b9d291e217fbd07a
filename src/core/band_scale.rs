use indexmap::IndexSet;
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Categorical scale splitting `[0, width]` into one equal band per key.
///
/// Keys keep first-seen order. A repeated key maps onto the band of its
/// first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: IndexSet<String>,
    width: f64,
}

impl BandScale {
    pub fn new<I, S>(keys: I, width: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "band scale width must be finite and > 0".to_owned(),
            ));
        }

        let mut set = IndexSet::new();
        for key in keys {
            let key = key.into();
            if !set.insert(key.clone()) {
                warn!(key = %key, "duplicate band key collapses onto its first band");
            }
        }
        Ok(Self { keys: set, width })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        self.width / self.keys.len() as f64
    }

    /// Left edge of the band assigned to `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .get_index_of(key)
            .map(|index| index as f64 * self.bandwidth())
    }

    /// `(key, band center)` pairs in band order, used for axis labels.
    pub fn centers(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let band = self.bandwidth();
        self.keys
            .iter()
            .enumerate()
            .map(move |(index, key)| (key.as_str(), index as f64 * band + band / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_width_evenly() {
        let scale = BandScale::new(["a", "b", "c", "d"], 800.0).expect("band scale");
        assert_eq!(scale.bandwidth(), 200.0);
        assert_eq!(scale.position("c"), Some(400.0));
        assert_eq!(scale.position("missing"), None);
    }

    #[test]
    fn duplicate_keys_share_first_band() {
        let scale = BandScale::new(["a", "b", "a"], 300.0).expect("band scale");
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.position("a"), Some(0.0));
    }
}
