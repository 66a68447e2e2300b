use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, month_abbreviation_es};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TOP_PADDING_PX: f64 = 20.0;
pub const DEFAULT_LEFT_PADDING_PX: f64 = 60.0;
pub const DEFAULT_RIGHT_PADDING_PX: f64 = 20.0;
pub const DEFAULT_BOTTOM_PADDING_PX: f64 = 40.0;

/// One labelled monetary sample. The x position is the index in the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn from_decimal(label: impl Into<String>, amount: Decimal) -> ChartResult<Self> {
        Ok(Self {
            label: label.into(),
            value: decimal_to_f64(amount, "amount")?,
        })
    }

    /// Labels the point with the abbreviated `es-ES` month name of `month`.
    #[must_use]
    pub fn for_month(month: NaiveDate, value: f64) -> Self {
        Self::new(month_abbreviation_es(month.month()), value)
    }
}

/// Pixel geometry of the drawing surface.
///
/// Padding reserves room for axis labels; only the inner chart area is used
/// for scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_top_padding")]
    pub top_padding: f64,
    #[serde(default = "default_left_padding")]
    pub left_padding: f64,
    #[serde(default = "default_right_padding")]
    pub right_padding: f64,
    #[serde(default = "default_bottom_padding")]
    pub bottom_padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(360.0, 220.0)
    }
}

impl Canvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            top_padding: DEFAULT_TOP_PADDING_PX,
            left_padding: DEFAULT_LEFT_PADDING_PX,
            right_padding: DEFAULT_RIGHT_PADDING_PX,
            bottom_padding: DEFAULT_BOTTOM_PADDING_PX,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, top: f64, left: f64, right: f64, bottom: f64) -> Self {
        self.top_padding = top;
        self.left_padding = left;
        self.right_padding = right;
        self.bottom_padding = bottom;
        self
    }

    #[must_use]
    pub fn chart_area(self) -> ChartArea {
        ChartArea {
            left: self.left_padding,
            top: self.top_padding,
            width: (self.width - self.left_padding - self.right_padding).max(0.0),
            height: (self.height - self.top_padding - self.bottom_padding).max(0.0),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let finite = [
            self.width,
            self.height,
            self.top_padding,
            self.left_padding,
            self.right_padding,
            self.bottom_padding,
        ]
        .iter()
        .all(|value| value.is_finite());
        finite && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("top_padding", self.top_padding),
            ("left_padding", self.left_padding),
            ("right_padding", self.right_padding),
            ("bottom_padding", self.bottom_padding),
        ] {
            if value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "canvas `{name}` must be >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plotting rectangle of a [`Canvas`], margins excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

fn default_top_padding() -> f64 {
    DEFAULT_TOP_PADDING_PX
}

fn default_left_padding() -> f64 {
    DEFAULT_LEFT_PADDING_PX
}

fn default_right_padding() -> f64 {
    DEFAULT_RIGHT_PADDING_PX
}

fn default_bottom_padding() -> f64 {
    DEFAULT_BOTTOM_PADDING_PX
}
