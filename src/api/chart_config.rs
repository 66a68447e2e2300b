use serde::{Deserialize, Serialize};

use crate::core::range::DEFAULT_NICE_UNIT;
use crate::core::{Canvas, DataPoint, RangeMode, SegmentColors};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Which assembler path a render runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    #[default]
    Line,
    Progress,
}

/// Host theme colors, used as fallbacks when explicit colors are omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: Color,
    pub text_secondary_color: Color,
    pub card_background_color: Color,
    pub border_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: Color::rgb8(0x21, 0x96, 0xF3),
            text_secondary_color: Color::rgb8(0x75, 0x75, 0x75),
            card_background_color: Color::rgb8(0xFF, 0xFF, 0xFF),
            border_color: Color::rgb8(0xE0, 0xE0, 0xE0),
        }
    }
}

/// Full set of rendering options for one scene computation.
///
/// The config is serializable so hosts can persist chart setup or ship it
/// across a bridge as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub mode: ChartMode,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default = "default_true")]
    pub show_zero_line: bool,
    #[serde(default = "default_true")]
    pub show_goal_line: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_true")]
    pub show_tooltips: bool,
    #[serde(default)]
    pub fit_data_range: bool,
    #[serde(default = "default_nice_unit")]
    pub nice_unit: f64,
    #[serde(default)]
    pub segment_colors: SegmentColors,
    #[serde(default)]
    pub line_color: Option<Color>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub canvas: Canvas,
    /// Host-owned pressed point. Matched against the series by label and
    /// value; when several points share both, the earliest one is highlighted.
    #[serde(default)]
    pub highlighted_point: Option<DataPoint>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::line(Vec::new())
    }
}

impl ChartConfig {
    /// Line chart over `data` with every scene element enabled.
    #[must_use]
    pub fn line(data: Vec<DataPoint>) -> Self {
        Self {
            mode: ChartMode::Line,
            data,
            current_value: 0.0,
            target_value: None,
            percentage: None,
            show_zero_line: true,
            show_goal_line: true,
            show_grid: true,
            show_labels: true,
            show_tooltips: true,
            fit_data_range: false,
            nice_unit: DEFAULT_NICE_UNIT,
            segment_colors: SegmentColors::default(),
            line_color: None,
            theme: Theme::default(),
            canvas: Canvas::default(),
            highlighted_point: None,
        }
    }

    /// Goal-progress bar for `current_value` out of `target_value`.
    #[must_use]
    pub fn progress(current_value: f64, target_value: f64) -> Self {
        Self {
            mode: ChartMode::Progress,
            current_value,
            target_value: Some(target_value),
            ..Self::line(Vec::new())
        }
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target_value: f64) -> Self {
        self.target_value = Some(target_value);
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }

    #[must_use]
    pub fn with_fit_data_range(mut self, fit_data_range: bool) -> Self {
        self.fit_data_range = fit_data_range;
        self
    }

    #[must_use]
    pub fn with_nice_unit(mut self, nice_unit: f64) -> Self {
        self.nice_unit = nice_unit;
        self
    }

    #[must_use]
    pub fn with_zero_line(mut self, show: bool) -> Self {
        self.show_zero_line = show;
        self
    }

    #[must_use]
    pub fn with_goal_line(mut self, show: bool) -> Self {
        self.show_goal_line = show;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_tooltips(mut self, show: bool) -> Self {
        self.show_tooltips = show;
        self
    }

    #[must_use]
    pub fn with_segment_colors(mut self, segment_colors: SegmentColors) -> Self {
        self.segment_colors = segment_colors;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, line_color: Color) -> Self {
        self.line_color = Some(line_color);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_highlighted_point(mut self, point: Option<DataPoint>) -> Self {
        self.highlighted_point = point;
        self
    }

    #[must_use]
    pub fn range_mode(&self) -> RangeMode {
        RangeMode::from_flags(self.fit_data_range, self.nice_unit)
    }

    /// Stroke color for line segments: explicit override, else theme primary.
    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.line_color.unwrap_or(self.theme.primary_color)
    }

    /// Checks the parts of a config that come from untrusted input.
    ///
    /// Scene computation never requires this; it is meant for configs loaded
    /// from JSON.
    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;

        if let Some(index) = self.data.iter().position(|point| !point.value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "data point {index} has a non-finite value"
            )));
        }
        for (name, value) in [
            ("current_value", Some(self.current_value)),
            ("target_value", self.target_value),
            ("percentage", self.percentage),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(format!("`{name}` must be finite")));
            }
        }
        if !self.nice_unit.is_finite() || self.nice_unit <= 0.0 {
            return Err(ChartError::InvalidData(
                "`nice_unit` must be finite and > 0".to_owned(),
            ));
        }

        for color in [
            self.segment_colors.above_goal,
            self.segment_colors.between_goal_and_zero,
            self.segment_colors.below_zero,
            self.theme.primary_color,
            self.theme.text_secondary_color,
            self.theme.card_background_color,
            self.theme.border_color,
        ]
        .into_iter()
        .chain(self.line_color)
        {
            color.validate()?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_nice_unit() -> f64 {
    DEFAULT_NICE_UNIT
}
