//! iris-charts: box and scatter charts of the Iris measurements.
//!
//! `core` holds the pure statistics and scale math (quartiles, IQR fences,
//! padded domains, band and linear scales). `api` loads CSV records and
//! turns them into backend-agnostic frames, and `render` draws those frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BoxPlotLayout, ChartConfig, ScatterPlotLayout};
pub use error::{ChartError, ChartResult};
