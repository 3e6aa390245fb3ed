use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default fraction of each step left empty between and around bands.
pub const DEFAULT_BAND_PADDING: f64 = 0.5;

/// Categorical mapping that gives each label an equal-width slot.
///
/// Inner and outer padding share one ratio and the bands are centered in
/// the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    start: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a band scale. Duplicate labels collapse onto their first
    /// appearance.
    pub fn new<I, S>(
        categories: I,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }

        let categories: IndexSet<String> = categories.into_iter().map(Into::into).collect();
        let count = categories.len() as f64;
        let span = range_end - range_start;
        let step = span / (count - padding + 2.0 * padding).max(1.0);
        let start = range_start + (span - step * (count - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            categories,
            range_start,
            range_end,
            padding,
            step,
            start,
            bandwidth,
        })
    }

    /// Left edge of the band for `category`, or `None` if it is unknown.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.categories
            .get_index_of(category)
            .map(|index| self.start + self.step * index as f64)
    }

    #[must_use]
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category)
            .map(|position| position + self.bandwidth * 0.5)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
