use tracing::debug;

use crate::api::axis::{AxisOrientation, append_axis, append_axis_titles, linear_ticks};
use crate::api::dataset::PETAL_WIDTH_COLUMN;
use crate::api::ChartConfig;
use crate::core::{AxisDomain, IrisRecord, LinearScale, OrdinalScale};
use crate::error::{ChartError, ChartResult};
use crate::render::palette::CATEGORY10;
use crate::render::{
    CirclePrimitive, Color, RenderFrame, TextBaseline, TextHAlign, TextPrimitive,
};

pub const SCATTER_PLOT_X_TITLE: &str = "Petal Length";
pub const SCATTER_PLOT_Y_TITLE: &str = "Petal Width";

/// One record projected into pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub species: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// One legend row: a color swatch followed by its species label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub species: String,
    pub color: Color,
    pub swatch_x: f64,
    pub y: f64,
}

/// Scales, colors and projected points of the petal scatter plot.
#[derive(Debug, Clone)]
pub struct ScatterPlotLayout {
    config: ChartConfig,
    x_scale: LinearScale,
    y_scale: LinearScale,
    colors: OrdinalScale<Color>,
    points: Vec<ScatterPoint>,
}

impl ScatterPlotLayout {
    /// Fits padded petal-length (x) and petal-width (y) domains and projects
    /// every record. All records must carry a petal width.
    pub fn build(records: &[IrisRecord], config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        if records.is_empty() {
            return Err(ChartError::EmptyGroup);
        }

        let widths = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record.petal_width.ok_or(ChartError::MissingMeasurement {
                    index,
                    field: PETAL_WIDTH_COLUMN,
                })
            })
            .collect::<ChartResult<Vec<f64>>>()?;

        let x_domain = AxisDomain::padded(
            records.iter().map(|record| record.petal_length),
            config.domain_padding,
        )?;
        let y_domain = AxisDomain::padded(widths.iter().copied(), config.domain_padding)?;

        let (left, right) = config.x_range();
        let (bottom, top) = config.y_range();
        let x_scale = LinearScale::new(x_domain, left, right)?;
        let y_scale = LinearScale::new(y_domain, bottom, top)?;
        let colors = OrdinalScale::new(
            records.iter().map(|record| record.species.as_str()),
            CATEGORY10.to_vec(),
        )?;

        let points = records
            .iter()
            .zip(&widths)
            .map(|(record, &width)| {
                Ok(ScatterPoint {
                    species: record.species.clone(),
                    x: x_scale.map(record.petal_length)?,
                    y: y_scale.map(width)?,
                    color: colors.get(&record.species).unwrap_or(Color::BLACK),
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;

        debug!(
            points = points.len(),
            species = colors.len(),
            x_low = x_domain.low(),
            x_high = x_domain.high(),
            y_low = y_domain.low(),
            y_high = y_domain.high(),
            "scatter plot layout built"
        );

        Ok(Self {
            config: *config,
            x_scale,
            y_scale,
            colors,
            points,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn colors(&self) -> &OrdinalScale<Color> {
        &self.colors
    }

    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let legend = &self.config.legend;
        self.colors
            .domain()
            .enumerate()
            .map(|(row, species)| LegendEntry {
                species: species.to_owned(),
                color: self.colors.get(species).unwrap_or(Color::BLACK),
                swatch_x: legend.x,
                y: legend.y + legend.row_step * row as f64,
            })
            .collect()
    }

    /// Builds the full scene: axes, titles, one circle per record and the
    /// species legend.
    pub fn to_frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(config.viewport).with_background(config.background);

        let (bottom, top) = config.y_range();
        append_axis(
            &mut frame,
            AxisOrientation::Bottom,
            bottom,
            config.x_range(),
            &linear_ticks(self.x_scale, config.axis.tick_count)?,
            &config.axis,
        );
        append_axis(
            &mut frame,
            AxisOrientation::Left,
            config.margins.left,
            (bottom, top),
            &linear_ticks(self.y_scale, config.axis.tick_count)?,
            &config.axis,
        );

        for point in &self.points {
            frame.circles.push(CirclePrimitive::new(
                point.x,
                point.y,
                config.point_radius,
                point.color,
            ));
        }

        append_axis_titles(&mut frame, config, SCATTER_PLOT_X_TITLE, SCATTER_PLOT_Y_TITLE);

        let legend = &config.legend;
        for entry in self.legend_entries() {
            frame.circles.push(CirclePrimitive::new(
                entry.swatch_x,
                entry.y,
                legend.swatch_radius,
                entry.color,
            ));
            frame.texts.push(
                TextPrimitive::new(
                    entry.species,
                    entry.swatch_x + legend.label_offset_x,
                    entry.y,
                    legend.font_size_px,
                    Color::BLACK,
                    TextHAlign::Left,
                )
                .with_baseline(TextBaseline::Middle),
            );
        }

        Ok(frame)
    }
}
