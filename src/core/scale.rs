use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Default padding added on each side of a data-fitted domain.
pub const DEFAULT_DOMAIN_PADDING: f64 = 1.0;

/// Closed data interval mapped onto an output range by a [`LinearScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    low: f64,
    high: f64,
}

impl AxisDomain {
    pub fn new(low: f64, high: f64) -> ChartResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ChartError::InvalidData(
                "axis domain bounds must be finite".to_owned(),
            ));
        }
        Ok(Self { low, high })
    }

    /// Fits `[min(values) - pad, max(values) + pad]`.
    pub fn padded(values: impl IntoIterator<Item = f64>, pad: f64) -> ChartResult<Self> {
        if !pad.is_finite() {
            return Err(ChartError::InvalidData(
                "domain padding must be finite".to_owned(),
            ));
        }

        let mut bounds: Option<(f64, f64)> = None;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "domain values must be finite".to_owned(),
                ));
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        let (min, max) = bounds.ok_or(ChartError::EmptyGroup)?;
        Self::new(min - pad, max + pad)
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.high == self.low
    }
}

/// Continuous value-to-pixel mapping.
///
/// Vertical axes pass an inverted range (`[bottom, top]`) so larger values
/// land higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: AxisDomain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        if domain.is_degenerate() {
            warn!(
                domain = domain.low,
                "degenerate linear domain, every value maps to the range midpoint"
            );
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> AxisDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a data value to output space.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        if self.domain.is_degenerate() {
            return Ok((self.range_start + self.range_end) * 0.5);
        }

        let normalized = (value - self.domain.low) / self.domain.span();
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps an output coordinate back to data space.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if self.domain.is_degenerate() {
            return Err(ChartError::DegenerateDomain {
                value: self.domain.low,
            });
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain.low + normalized * self.domain.span())
    }
}
