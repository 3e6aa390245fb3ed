pub mod axis;
mod box_plot;
mod config;
pub mod dataset;
pub mod pipeline;
mod scatter_plot;

pub use box_plot::{BOX_PLOT_X_TITLE, BOX_PLOT_Y_TITLE, BoxGeometry, BoxPlotLayout};
pub use config::{AxisStyle, ChartConfig, LegendConfig};
pub use dataset::{load_records, load_records_from_reader};
pub use pipeline::{ChartKind, render_box_plot, render_chart, render_scatter_plot};
pub use scatter_plot::{
    LegendEntry, SCATTER_PLOT_X_TITLE, SCATTER_PLOT_Y_TITLE, ScatterPlotLayout, ScatterPoint,
};
