use serde::{Deserialize, Serialize};

use crate::core::{Canvas, ChartArea, ValueRange};

/// Maps `(index, value)` pairs into canvas pixels.
///
/// Pixel y grows downward while values grow upward, so larger values always
/// land on smaller y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapper {
    area: ChartArea,
    range: ValueRange,
    x_scale: f64,
    y_scale: f64,
}

impl ScaleMapper {
    #[must_use]
    pub fn new(range: ValueRange, canvas: Canvas, point_count: usize) -> Self {
        let area = canvas.chart_area();
        let x_steps = point_count.saturating_sub(1).max(1);
        Self {
            area,
            range,
            x_scale: area.width / x_steps as f64,
            y_scale: area.height / range.span(),
        }
    }

    #[must_use]
    pub fn x_scale(self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn area(self) -> ChartArea {
        self.area
    }

    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        self.area.left + index as f64 * self.x_scale
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.area.top + self.area.height - (value - self.range.min_y) * self.y_scale
    }

    /// Inverse of [`Self::value_to_y`]. A zero-height area maps every pixel to `min_y`.
    #[must_use]
    pub fn y_to_value(self, y: f64) -> f64 {
        if self.y_scale == 0.0 {
            return self.range.min_y;
        }
        self.range.min_y + (self.area.top + self.area.height - y) / self.y_scale
    }

    #[must_use]
    pub fn map(self, index: usize, value: f64) -> (f64, f64) {
        (self.index_to_x(index), self.value_to_y(value))
    }
}
