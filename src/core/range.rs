use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Default nice-number granularity in currency units.
pub const DEFAULT_NICE_UNIT: f64 = 1_000.0;
/// Relative padding applied around the data in fit mode.
pub const FIT_PADDING_RATIO: f64 = 0.10;
/// Absolute padding used in fit mode when the series is flat.
pub const FLAT_SERIES_PAD: f64 = 1.0;
/// Smallest span a resolved range may have.
pub const MIN_RANGE: f64 = 1.0;

/// Axis-bound policy for the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RangeMode {
    /// Bounds span the data min/max plus 10% padding.
    FitData,
    /// Bounds always include zero and snap outward to multiples of `unit`.
    Nice { unit: f64 },
}

impl Default for RangeMode {
    fn default() -> Self {
        Self::Nice {
            unit: DEFAULT_NICE_UNIT,
        }
    }
}

impl RangeMode {
    #[must_use]
    pub fn from_flags(fit_data_range: bool, nice_unit: f64) -> Self {
        if fit_data_range {
            Self::FitData
        } else {
            Self::Nice { unit: nice_unit }
        }
    }
}

/// Resolved value-axis bounds. `max_y - min_y >= MIN_RANGE` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min_y: f64,
    pub max_y: f64,
}

impl ValueRange {
    #[must_use]
    pub fn span(self) -> f64 {
        (self.max_y - self.min_y).max(MIN_RANGE)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min_y..=self.max_y).contains(&value)
    }

    /// `count` values evenly spaced from `min_y` to `max_y`, both included.
    #[must_use]
    pub fn ticks(self, count: usize) -> impl Iterator<Item = f64> {
        let step = if count > 1 {
            (self.max_y - self.min_y) / (count - 1) as f64
        } else {
            0.0
        };
        (0..count).map(move |i| {
            if i + 1 == count && count > 1 {
                self.max_y
            } else {
                self.min_y + step * i as f64
            }
        })
    }
}

/// Computes axis bounds for `data`.
///
/// Returns `None` when there is nothing to draw: empty data, or data with no
/// finite value.
#[must_use]
pub fn resolve_range(data: &[DataPoint], mode: RangeMode) -> Option<ValueRange> {
    let (data_min, data_max) = finite_min_max(data)?;

    let (min_y, max_y) = match mode {
        RangeMode::FitData => {
            let mut pad = (data_max - data_min) * FIT_PADDING_RATIO;
            if pad == 0.0 {
                pad = FLAT_SERIES_PAD;
            }
            (data_min - pad, data_max + pad)
        }
        RangeMode::Nice { unit } => nice_bounds(data_min, data_max, unit),
    };

    Some(enforce_min_range(min_y, max_y))
}

fn finite_min_max(data: &[DataPoint]) -> Option<(f64, f64)> {
    data.iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

fn nice_bounds(data_min: f64, data_max: f64, unit: f64) -> (f64, f64) {
    let unit = if unit.is_finite() && unit > 0.0 {
        unit
    } else {
        DEFAULT_NICE_UNIT
    };

    let mut min_y = (data_min.min(0.0) / unit).floor() * unit;
    let mut max_y = (data_max.max(0.0) / unit).ceil() * unit;

    min_y = min_y.min(0.0);
    max_y = max_y.max(0.0);
    if max_y == min_y {
        max_y = min_y + unit;
    }
    (min_y, max_y)
}

fn enforce_min_range(min_y: f64, max_y: f64) -> ValueRange {
    if max_y - min_y >= MIN_RANGE {
        return ValueRange { min_y, max_y };
    }
    let mid = (min_y + max_y) / 2.0;
    ValueRange {
        min_y: mid - MIN_RANGE / 2.0,
        max_y: mid + MIN_RANGE / 2.0,
    }
}
