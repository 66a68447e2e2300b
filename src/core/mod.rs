pub mod classify;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod types;

pub use classify::{SegmentBand, SegmentColors, classify, goal_reference};
pub use range::{RangeMode, ValueRange, resolve_range};
pub use scale::ScaleMapper;
pub use types::{Canvas, ChartArea, DataPoint};
