//! Scene assembly: turns a [`ChartConfig`] into a [`RenderScene`].

mod chart_config;
mod currency_format;
mod engine;
mod json_contract;
mod line_scene_builder;
mod progress_scene_builder;
mod render_scene;
mod tooltip;

use tracing::debug;

pub use chart_config::{ChartConfig, ChartMode, Theme};
pub use currency_format::{format_currency, format_percentage, round_to_nearest};
pub use engine::ChartEngine;
pub use json_contract::{RENDER_SCENE_JSON_SCHEMA_V1, RenderSceneJsonContractV1};
pub use line_scene_builder::{X_LABEL_OFFSET_PX, Y_LABEL_GAP_PX, Y_LABEL_ROUNDING_STEP};
pub use progress_scene_builder::{PROGRESS_BAR_HEIGHT_PX, bar_width_percent, progress_percentage};
pub use render_scene::{
    AxisLabel, GRID_LINE_COUNT, GridLine, HIT_REGION_RADIUS_PX, HitRegion, LineSegment,
    MARKER_RADIUS_PX, PointMarker, ProgressBar, ReferenceLine, ReferenceLineKind, RenderScene,
    SceneSegment, SceneStyle, Tooltip, Y_LABEL_COUNT,
};
pub use tooltip::{project_point, tooltip_for};

/// Computes the scene for one render pass.
///
/// Total over finite inputs: empty data, flat series and single points all
/// produce a well-defined scene. The config is only read.
#[must_use]
pub fn compute_scene(config: &ChartConfig) -> RenderScene {
    let scene = match config.mode {
        ChartMode::Line => line_scene_builder::build_line_scene(config),
        ChartMode::Progress => progress_scene_builder::build_progress_scene(config),
    };
    debug!(
        mode = ?config.mode,
        points = scene.points.len(),
        segments = scene.segments.len(),
        reference_lines = scene.reference_lines.len(),
        tooltip = scene.tooltip.is_some(),
        "computed chart scene"
    );
    scene
}
