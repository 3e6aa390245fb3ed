pub mod band_scale;
pub mod grouping;
pub mod ordinal_scale;
pub mod quantile;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::{BandScale, DEFAULT_BAND_PADDING};
pub use grouping::{group_petal_lengths, group_values_by, summarize_groups};
pub use ordinal_scale::OrdinalScale;
pub use quantile::{FENCE_IQR_MULTIPLIER, QuartileSummary, quantile_sorted};
pub use scale::{AxisDomain, DEFAULT_DOMAIN_PADDING, LinearScale};
pub use ticks::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT, format_tick, nice_ticks, tick_step};
pub use types::{IrisRecord, Margins, Viewport};
