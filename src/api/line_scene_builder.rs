use tracing::{trace, warn};

use crate::core::{ScaleMapper, classify, goal_reference, resolve_range};

use super::currency_format::{format_currency, round_to_nearest};
use super::render_scene::{
    AxisLabel, GRID_LINE_COUNT, GridLine, HIT_REGION_RADIUS_PX, HitRegion, LineSegment,
    MARKER_RADIUS_PX, PointMarker, ReferenceLine, ReferenceLineKind, RenderScene, SceneSegment,
    SceneStyle, Y_LABEL_COUNT,
};
use super::ChartConfig;
use super::tooltip::{find_highlighted_marker, tooltip_for};

/// Y labels are rounded to this step before formatting.
pub const Y_LABEL_ROUNDING_STEP: f64 = 100.0;
/// Gap between the chart area's left edge and right-aligned y labels.
pub const Y_LABEL_GAP_PX: f64 = 8.0;
/// Distance from the chart area's bottom edge to the x-label baseline.
pub const X_LABEL_OFFSET_PX: f64 = 20.0;

pub(crate) fn build_line_scene(config: &ChartConfig) -> RenderScene {
    let mut scene = RenderScene::empty(config.canvas, SceneStyle::from_config(config));

    let Some(range) = resolve_range(&config.data, config.range_mode()) else {
        trace!(points = config.data.len(), "no drawable values, line scene is empty");
        return scene;
    };
    trace!(min_y = range.min_y, max_y = range.max_y, "resolved value range");

    let mapper = ScaleMapper::new(range, config.canvas, config.data.len());
    let area = mapper.area();
    scene.range = Some(range);

    if config.show_grid {
        scene.grid_lines = range
            .ticks(GRID_LINE_COUNT)
            .map(|value| GridLine {
                y: mapper.value_to_y(value),
                value,
            })
            .collect();
    }

    if config.show_zero_line {
        scene.reference_lines.push(ReferenceLine {
            y: mapper.value_to_y(0.0),
            value: 0.0,
            kind: ReferenceLineKind::Zero,
            color: config.theme.text_secondary_color,
        });
    }
    if let Some(target) = config.target_value.filter(|_| config.show_goal_line) {
        scene.reference_lines.push(ReferenceLine {
            y: mapper.value_to_y(target),
            value: target,
            kind: ReferenceLineKind::Goal,
            color: config.segment_colors.above_goal,
        });
    }

    if config.show_labels {
        scene.y_labels = range
            .ticks(Y_LABEL_COUNT)
            .map(|value| AxisLabel {
                x: area.left - Y_LABEL_GAP_PX,
                y: mapper.value_to_y(value),
                text: format_currency(round_to_nearest(value, Y_LABEL_ROUNDING_STEP)),
            })
            .collect();
        scene.x_labels = config
            .data
            .iter()
            .enumerate()
            .map(|(index, point)| AxisLabel {
                x: mapper.index_to_x(index),
                y: area.bottom() + X_LABEL_OFFSET_PX,
                text: point.label.clone(),
            })
            .collect();
    }

    let goal = goal_reference(config.target_value);
    let mut skipped = 0usize;
    for (index, point) in config.data.iter().enumerate() {
        if !point.value.is_finite() {
            skipped += 1;
            continue;
        }
        let (x, y) = mapper.map(index, point.value);
        let band = classify(point.value, goal);
        scene.points.push(PointMarker {
            index,
            x,
            y,
            radius: MARKER_RADIUS_PX,
            band,
            color: config.segment_colors.color_for(band),
            value: point.value,
            label: point.label.clone(),
            hit_region: config.show_tooltips.then_some(HitRegion {
                x,
                y,
                radius: HIT_REGION_RADIUS_PX,
            }),
        });
    }
    if skipped > 0 {
        warn!(skipped, "dropped data points with non-finite values");
    }

    let stroke = config.stroke_color();
    scene.segments = scene
        .points
        .windows(2)
        .filter(|pair| pair[1].index == pair[0].index + 1)
        .map(|pair| SceneSegment {
            path: LineSegment {
                x1: pair[0].x,
                y1: pair[0].y,
                x2: pair[1].x,
                y2: pair[1].y,
            },
            color: stroke,
        })
        .collect();

    let highlighted = config
        .highlighted_point
        .as_ref()
        .filter(|_| config.show_tooltips);
    if let Some(highlighted) = highlighted {
        match find_highlighted_marker(&scene.points, highlighted) {
            Some(marker) => scene.tooltip = Some(tooltip_for(marker)),
            None => warn!(
                label = %highlighted.label,
                value = highlighted.value,
                "highlighted point is not part of the series"
            ),
        }
    }

    scene
}
