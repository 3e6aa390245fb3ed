//! Two-phase chart entry points.
//!
//! Loading (`dataset`) produces typed records; the functions here take those
//! records and a `Renderer`, so the statistics and layout work runs without
//! any I/O.

use tracing::debug;

use crate::api::{BoxPlotLayout, ChartConfig, ScatterPlotLayout};
use crate::core::IrisRecord;
use crate::error::ChartResult;
use crate::render::Renderer;

/// Chart variants produced from the Iris records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    BoxPlot,
    ScatterPlot,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::BoxPlot, Self::ScatterPlot];

    /// Default output file stem.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::BoxPlot => "boxplot",
            Self::ScatterPlot => "scatterplot",
        }
    }
}

pub fn render_box_plot<R: Renderer>(
    records: &[IrisRecord],
    config: &ChartConfig,
    renderer: &mut R,
) -> ChartResult<BoxPlotLayout> {
    let layout = BoxPlotLayout::build(records, config)?;
    let frame = layout.to_frame()?;
    debug!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        "rendering box plot"
    );
    renderer.render(&frame)?;
    Ok(layout)
}

pub fn render_scatter_plot<R: Renderer>(
    records: &[IrisRecord],
    config: &ChartConfig,
    renderer: &mut R,
) -> ChartResult<ScatterPlotLayout> {
    let layout = ScatterPlotLayout::build(records, config)?;
    let frame = layout.to_frame()?;
    debug!(circles = frame.circles.len(), "rendering scatter plot");
    renderer.render(&frame)?;
    Ok(layout)
}

/// Renders `kind` without handing back its layout.
pub fn render_chart<R: Renderer>(
    kind: ChartKind,
    records: &[IrisRecord],
    config: &ChartConfig,
    renderer: &mut R,
) -> ChartResult<()> {
    match kind {
        ChartKind::BoxPlot => render_box_plot(records, config, renderer).map(|_| ()),
        ChartKind::ScatterPlot => render_scatter_plot(records, config, renderer).map(|_| ()),
    }
}
