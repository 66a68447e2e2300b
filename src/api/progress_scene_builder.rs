use tracing::trace;

use crate::render::RectPrimitive;

use super::ChartConfig;
use super::currency_format::{format_currency, format_percentage};
use super::render_scene::{ProgressBar, RenderScene, SceneStyle};

pub const PROGRESS_BAR_HEIGHT_PX: f64 = 12.0;

/// Progress percentage: the provided value wins, otherwise
/// `current / target * 100`, and 0 when the target is not positive.
///
/// The result is not clamped.
#[must_use]
pub fn progress_percentage(current: f64, target: f64, provided: Option<f64>) -> f64 {
    provided.unwrap_or(if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    })
}

/// Bar width in percent, always within `[0, 100]`.
#[must_use]
pub fn bar_width_percent(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

pub(crate) fn build_progress_scene(config: &ChartConfig) -> RenderScene {
    let mut scene = RenderScene::empty(config.canvas, SceneStyle::from_config(config));

    let goal = config.target_value.unwrap_or(0.0);
    let current = config.current_value;
    let percentage = progress_percentage(current, goal, config.percentage);
    let percentage_clamped = bar_width_percent(percentage);
    let remaining = goal - current;
    trace!(percentage, percentage_clamped, remaining, "resolved goal progress");

    let area = config.canvas.chart_area();
    let corner_radius = PROGRESS_BAR_HEIGHT_PX / 2.0;
    let track = RectPrimitive::new(
        area.left,
        area.top,
        area.width,
        PROGRESS_BAR_HEIGHT_PX,
        config.theme.border_color,
    )
    .with_corner_radius(corner_radius);
    let fill_color = if percentage >= 100.0 {
        config.segment_colors.above_goal
    } else {
        config.theme.primary_color
    };
    let fill = RectPrimitive::new(
        area.left,
        area.top,
        area.width * percentage_clamped / 100.0,
        PROGRESS_BAR_HEIGHT_PX,
        fill_color,
    )
    .with_corner_radius(corner_radius);

    scene.progress = Some(ProgressBar {
        percentage,
        percentage_clamped,
        percentage_text: format_percentage(percentage),
        goal,
        current,
        remaining,
        goal_text: format_currency(goal),
        current_text: format_currency(current),
        remaining_text: format_currency(remaining),
        track,
        fill,
    });
    scene
}
