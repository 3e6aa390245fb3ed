use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_BAND_PADDING, DEFAULT_DOMAIN_PADDING, DEFAULT_TICK_COUNT, MAX_TICK_COUNT, Margins,
    Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Placement of the categorical legend drawn by the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub x: f64,
    pub y: f64,
    pub row_step: f64,
    pub swatch_radius: f64,
    pub label_offset_x: f64,
    pub font_size_px: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            x: 70.0,
            y: 55.0,
            row_step: 20.0,
            swatch_radius: 5.0,
            label_offset_x: 10.0,
            font_size_px: 12.0,
        }
    }
}

/// Axis tick and label styling shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub tick_font_size_px: f64,
    pub title_font_size_px: f64,
    pub tick_count: usize,
    pub color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            tick_font_size_px: 10.0,
            title_font_size_px: 12.0,
            tick_count: DEFAULT_TICK_COUNT,
            color: Color::BLACK,
        }
    }
}

/// Chart setup shared by the box and scatter plots.
///
/// Serializable so callers can keep layouts in a JSON file. Missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_domain_padding")]
    pub domain_padding: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub axis: AxisStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            background: default_background(),
            domain_padding: default_domain_padding(),
            band_padding: default_band_padding(),
            point_radius: default_point_radius(),
            legend: LegendConfig::default(),
            axis: AxisStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_domain_padding(mut self, domain_padding: f64) -> Self {
        self.domain_padding = domain_padding;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate(self.viewport)?;
        self.background.validate()?;
        self.axis.color.validate()?;

        if !self.domain_padding.is_finite() || self.domain_padding < 0.0 {
            return Err(ChartError::InvalidData(
                "domain padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..=1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if self.axis.tick_count == 0 || self.axis.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "axis tick count must be in [1, {MAX_TICK_COUNT}]"
            )));
        }
        Ok(())
    }

    /// Left and right pixel bounds of the plot area.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (
            self.margins.left,
            f64::from(self.viewport.width) - self.margins.right,
        )
    }

    /// Bottom and top pixel bounds of the plot area, in that order.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (
            f64::from(self.viewport.height) - self.margins.bottom,
            self.margins.top,
        )
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(600, 400)
}

fn default_background() -> Color {
    Color::from_rgb8(0xe9, 0xf7, 0xf2)
}

fn default_domain_padding() -> f64 {
    DEFAULT_DOMAIN_PADDING
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

fn default_point_radius() -> f64 {
    3.0
}
