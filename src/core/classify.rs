use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Classification band of a value relative to a goal reference and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentBand {
    AboveGoal,
    BetweenGoalAndZero,
    BelowZero,
}

/// Classifies `value` against `goal_reference`.
///
/// Bands are checked from the top, so a value equal to a boundary belongs to
/// the higher band. With a goal at or below zero the middle band is empty.
#[must_use]
pub fn classify(value: f64, goal_reference: f64) -> SegmentBand {
    if value >= goal_reference {
        SegmentBand::AboveGoal
    } else if value >= 0.0 {
        SegmentBand::BetweenGoalAndZero
    } else {
        SegmentBand::BelowZero
    }
}

/// Goal reference used for classification; an absent target means zero.
#[must_use]
pub fn goal_reference(target_value: Option<f64>) -> f64 {
    target_value.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Marker colors for the three classification bands.
///
/// Only point markers and tooltip accents are colored by band. Line strokes
/// keep a single neutral color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentColors {
    pub above_goal: Color,
    pub between_goal_and_zero: Color,
    pub below_zero: Color,
}

impl Default for SegmentColors {
    fn default() -> Self {
        Self {
            above_goal: Color::rgb8(0x4C, 0xAF, 0x50),
            between_goal_and_zero: Color::rgb8(0xFF, 0x98, 0x00),
            below_zero: Color::rgb8(0xF4, 0x43, 0x36),
        }
    }
}

impl SegmentColors {
    #[must_use]
    pub fn color_for(self, band: SegmentBand) -> Color {
        match band {
            SegmentBand::AboveGoal => self.above_goal,
            SegmentBand::BetweenGoalAndZero => self.between_goal_and_zero,
            SegmentBand::BelowZero => self.below_zero,
        }
    }

    #[must_use]
    pub fn classify(self, value: f64, goal_reference: f64) -> Color {
        self.color_for(classify(value, goal_reference))
    }
}
