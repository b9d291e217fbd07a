pub mod band_scale;
pub mod extent;
pub mod scale;
pub mod ticks;
pub mod transition;
pub mod types;
pub mod zoom;

pub use band_scale::BandScale;
pub use extent::{Extent, compute_extent, pad_extent, raw_extent, zero_based_extent};
pub use scale::LinearScale;
pub use ticks::{format_tick, linear_ticks, tick_precision, tick_step};
pub use transition::{Easing, Interpolate, Transition};
pub use types::{
    AxisSpec, CountCategory, DataPoint, EntityKind, Margins, OverviewDatum, PlotArea, RecordKey,
    Viewport,
};
pub use zoom::{ZoomAxis, ZoomTransform};
