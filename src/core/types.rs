use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

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

/// Plot insets from each viewport edge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn validate(self, viewport: Viewport) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }

        if self.left + self.right >= f64::from(viewport.width)
            || self.top + self.bottom >= f64::from(viewport.height)
        {
            return Err(ChartError::InvalidData(
                "margins must leave a non-empty plot area".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

/// One Iris observation.
///
/// `petal_width` is optional because the box plot only needs species and
/// petal length; the scatter plot rejects records without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrisRecord {
    pub species: String,
    pub petal_length: f64,
    pub petal_width: Option<f64>,
}

impl IrisRecord {
    /// Builds a record from already-parsed values.
    ///
    /// Measurements must be finite.
    pub fn new(
        species: impl Into<String>,
        petal_length: f64,
        petal_width: Option<f64>,
    ) -> ChartResult<Self> {
        if !petal_length.is_finite() || petal_width.is_some_and(|width| !width.is_finite()) {
            return Err(ChartError::InvalidData(
                "iris measurements must be finite".to_owned(),
            ));
        }

        Ok(Self {
            species: species.into(),
            petal_length,
            petal_width,
        })
    }
}
