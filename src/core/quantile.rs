use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Multiplier applied to the IQR when placing whisker fences.
pub const FENCE_IQR_MULTIPLIER: f64 = 1.5;

/// Five-number summary drawn by one box-and-whisker mark.
///
/// `min` and `max` are IQR fences, not the observed extremes of the group.
/// They may sit outside the data range, or inside it when the group has
/// outliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl QuartileSummary {
    /// Summarizes one group of values. Input order does not matter.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::EmptyGroup);
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "summary values must be finite".to_owned(),
            ));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Same as [`QuartileSummary::from_values`] for input already sorted ascending.
    pub fn from_sorted(sorted: &[f64]) -> ChartResult<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let median = quantile_sorted(sorted, 0.5)?;
        let q3 = quantile_sorted(sorted, 0.75)?;
        let iqr = q3 - q1;

        Ok(Self {
            min: q1 - FENCE_IQR_MULTIPLIER * iqr,
            q1,
            median,
            q3,
            max: q3 + FENCE_IQR_MULTIPLIER * iqr,
        })
    }

    #[must_use]
    pub fn iqr(self) -> f64 {
        self.q3 - self.q1
    }
}

/// Linear-interpolation quantile over an ascending slice.
///
/// `h = p * (n - 1)`; the result interpolates between `sorted[floor(h)]` and
/// `sorted[ceil(h)]`. Unsorted input yields a meaningless value.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> ChartResult<f64> {
    if sorted.is_empty() {
        return Err(ChartError::EmptyGroup);
    }
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ChartError::InvalidData(
            "quantile fraction must be finite and in [0, 1]".to_owned(),
        ));
    }
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }

    let h = p * (sorted.len() - 1) as f64;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let low_value = sorted[lower];
    Ok(low_value + (h - h.floor()) * (sorted[upper] - low_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_endpoints_hit_extremes() {
        let sorted = [1.0, 4.0, 9.0];
        assert_eq!(quantile_sorted(&sorted, 0.0).expect("p=0"), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0).expect("p=1"), 9.0);
    }

    #[test]
    fn quantile_rejects_out_of_range_fraction() {
        assert!(quantile_sorted(&[1.0, 2.0], 1.5).is_err());
        assert!(quantile_sorted(&[1.0, 2.0], f64::NAN).is_err());
    }

    #[test]
    fn zero_iqr_collapses_fences() {
        let summary = QuartileSummary::from_values(&[2.0, 2.0]).expect("summary");
        assert_eq!(summary.iqr(), 0.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 2.0);
    }
}
