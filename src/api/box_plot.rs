use indexmap::IndexMap;
use tracing::debug;

use crate::api::axis::{AxisOrientation, append_axis, append_axis_titles, band_ticks, linear_ticks};
use crate::api::ChartConfig;
use crate::core::{
    AxisDomain, BandScale, IrisRecord, LinearScale, QuartileSummary, group_petal_lengths,
    summarize_groups,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

pub const BOX_PLOT_X_TITLE: &str = "Petal Species";
pub const BOX_PLOT_Y_TITLE: &str = "Petal Length";

const MARK_STROKE_WIDTH: f64 = 1.0;

/// Pixel geometry of one box-and-whisker mark.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    pub species: String,
    pub x: f64,
    pub bandwidth: f64,
    pub center_x: f64,
    pub whisker_top: f64,
    pub box_top: f64,
    pub median_y: f64,
    pub box_bottom: f64,
    pub whisker_bottom: f64,
}

/// Everything the box plot needs after the statistics pass.
#[derive(Debug, Clone)]
pub struct BoxPlotLayout {
    config: ChartConfig,
    summaries: IndexMap<String, QuartileSummary>,
    x_scale: BandScale,
    y_scale: LinearScale,
}

impl BoxPlotLayout {
    /// Groups petal lengths by species, summarizes each group and fits the
    /// band and linear scales.
    pub fn build(records: &[IrisRecord], config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        if records.is_empty() {
            return Err(ChartError::EmptyGroup);
        }

        let groups = group_petal_lengths(records);
        let summaries = summarize_groups(&groups)?;

        let (left, right) = config.x_range();
        let x_scale = BandScale::new(groups.keys().cloned(), left, right, config.band_padding)?;

        let domain = AxisDomain::padded(
            records.iter().map(|record| record.petal_length),
            config.domain_padding,
        )?;
        let (bottom, top) = config.y_range();
        let y_scale = LinearScale::new(domain, bottom, top)?;

        debug!(
            groups = summaries.len(),
            domain_low = domain.low(),
            domain_high = domain.high(),
            bandwidth = x_scale.bandwidth(),
            "box plot layout built"
        );

        Ok(Self {
            config: *config,
            summaries,
            x_scale,
            y_scale,
        })
    }

    /// Summaries keyed by species in first-appearance order.
    #[must_use]
    pub fn summaries(&self) -> &IndexMap<String, QuartileSummary> {
        &self.summaries
    }

    #[must_use]
    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn box_geometry(&self) -> ChartResult<Vec<BoxGeometry>> {
        let bandwidth = self.x_scale.bandwidth();
        self.summaries
            .iter()
            .map(|(species, summary)| {
                let x = self.x_scale.position(species).ok_or_else(|| {
                    ChartError::InvalidData(format!("species `{species}` has no band"))
                })?;
                Ok(BoxGeometry {
                    species: species.clone(),
                    x,
                    bandwidth,
                    center_x: x + bandwidth / 2.0,
                    whisker_top: self.y_scale.map(summary.max)?,
                    box_top: self.y_scale.map(summary.q3)?,
                    median_y: self.y_scale.map(summary.median)?,
                    box_bottom: self.y_scale.map(summary.q1)?,
                    whisker_bottom: self.y_scale.map(summary.min)?,
                })
            })
            .collect()
    }

    /// Builds the full scene: axes, titles and one box-and-whisker per species.
    ///
    /// Each whisker is split into the segment above and the segment below the
    /// box, so the box never has to cover it.
    pub fn to_frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(config.viewport).with_background(config.background);

        let (bottom, top) = config.y_range();
        append_axis(
            &mut frame,
            AxisOrientation::Bottom,
            bottom,
            self.x_scale.range(),
            &band_ticks(&self.x_scale),
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
        append_axis_titles(&mut frame, config, BOX_PLOT_X_TITLE, BOX_PLOT_Y_TITLE);

        for mark in self.box_geometry()? {
            frame.lines.push(LinePrimitive::new(
                mark.center_x,
                mark.whisker_top,
                mark.center_x,
                mark.box_top,
                MARK_STROKE_WIDTH,
                Color::BLACK,
            ));
            frame.lines.push(LinePrimitive::new(
                mark.center_x,
                mark.box_bottom,
                mark.center_x,
                mark.whisker_bottom,
                MARK_STROKE_WIDTH,
                Color::BLACK,
            ));
            frame.rects.push(
                RectPrimitive::new(
                    mark.x,
                    mark.box_top,
                    mark.bandwidth,
                    mark.box_bottom - mark.box_top,
                    Color::WHITE,
                )
                .with_border(MARK_STROKE_WIDTH, Color::BLACK),
            );
            frame.lines.push(LinePrimitive::new(
                mark.x,
                mark.median_y,
                mark.x + mark.bandwidth,
                mark.median_y,
                MARK_STROKE_WIDTH,
                Color::BLACK,
            ));
        }

        Ok(frame)
    }
}
