use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Canvas, DataPoint, SegmentBand, ValueRange};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::ChartConfig;

pub const GRID_LINE_COUNT: usize = 5;
pub const Y_LABEL_COUNT: usize = 5;
pub const MARKER_RADIUS_PX: f64 = 6.0;
pub const HIT_REGION_RADIUS_PX: f64 = 20.0;
pub const SEGMENT_STROKE_WIDTH_PX: f64 = 2.0;
pub const GRID_STROKE_WIDTH_PX: f64 = 1.0;
pub const REFERENCE_STROKE_WIDTH_PX: f64 = 1.5;
pub const LABEL_FONT_SIZE_PX: f64 = 10.0;
pub const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;

const TOOLTIP_CHAR_WIDTH_PX: f64 = 7.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_HEIGHT_PX: f64 = 40.0;
const TOOLTIP_OFFSET_PX: f64 = 12.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 6.0;
const PROGRESS_TEXT_GAP_PX: f64 = 16.0;

/// Straight path between two consecutive mapped points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSegment {
    pub path: LineSegment,
    pub color: Color,
}

/// Invisible touch target centered on a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl HitRegion {
    #[must_use]
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) <= self.radius
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub band: SegmentBand,
    pub color: Color,
    pub value: f64,
    pub label: String,
    pub hit_region: Option<HitRegion>,
}

impl PointMarker {
    #[must_use]
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new(self.label.clone(), self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLineKind {
    Zero,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub value: f64,
    pub kind: ReferenceLineKind,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Floating label for a pressed point. The host decides when to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub formatted_value: String,
    pub label: String,
    pub color: Color,
}

/// Goal-progress breakdown.
///
/// `percentage` is exact and may exceed 100; `percentage_clamped` is the bar
/// width in `[0, 100]`. `remaining` goes negative once the goal is exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    pub percentage: f64,
    pub percentage_clamped: f64,
    pub percentage_text: String,
    pub goal: f64,
    pub current: f64,
    pub remaining: f64,
    pub goal_text: String,
    pub current_text: String,
    pub remaining_text: String,
    pub track: RectPrimitive,
    pub fill: RectPrimitive,
}

/// Colors for non-data elements, resolved from the theme once per scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub grid_color: Color,
    pub label_color: Color,
    pub tooltip_background: Color,
}

impl SceneStyle {
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            grid_color: config.theme.border_color,
            label_color: config.theme.text_secondary_color,
            tooltip_background: config.theme.card_background_color,
        }
    }
}

/// Renderer-agnostic description of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    pub canvas: Canvas,
    pub style: SceneStyle,
    pub range: Option<ValueRange>,
    pub segments: Vec<SceneSegment>,
    pub points: Vec<PointMarker>,
    pub grid_lines: SmallVec<[GridLine; GRID_LINE_COUNT]>,
    pub reference_lines: SmallVec<[ReferenceLine; 2]>,
    pub y_labels: SmallVec<[AxisLabel; Y_LABEL_COUNT]>,
    pub x_labels: Vec<AxisLabel>,
    pub progress: Option<ProgressBar>,
    pub tooltip: Option<Tooltip>,
}

impl RenderScene {
    #[must_use]
    pub fn empty(canvas: Canvas, style: SceneStyle) -> Self {
        Self {
            canvas,
            style,
            range: None,
            segments: Vec::new(),
            points: Vec::new(),
            grid_lines: SmallVec::new(),
            reference_lines: SmallVec::new(),
            y_labels: SmallVec::new(),
            x_labels: Vec::new(),
            progress: None,
            tooltip: None,
        }
    }

    /// True when the scene draws nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
            && self.points.is_empty()
            && self.grid_lines.is_empty()
            && self.reference_lines.is_empty()
            && self.y_labels.is_empty()
            && self.x_labels.is_empty()
            && self.progress.is_none()
            && self.tooltip.is_none()
    }

    /// Flattens the scene into draw primitives.
    ///
    /// Hit-regions are emitted as transparent circles under their markers so
    /// backends that hit-test on drawn shapes keep the larger touch target.
    #[must_use]
    pub fn to_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.canvas);
        let area = self.canvas.chart_area();

        for grid in &self.grid_lines {
            frame.lines.push(LinePrimitive::new(
                area.left,
                grid.y,
                area.right(),
                grid.y,
                GRID_STROKE_WIDTH_PX,
                self.style.grid_color,
            ));
        }
        for reference in &self.reference_lines {
            let stroke_style = match reference.kind {
                ReferenceLineKind::Zero => LineStrokeStyle::Solid,
                ReferenceLineKind::Goal => LineStrokeStyle::Dashed,
            };
            frame.lines.push(
                LinePrimitive::new(
                    area.left,
                    reference.y,
                    area.right(),
                    reference.y,
                    REFERENCE_STROKE_WIDTH_PX,
                    reference.color,
                )
                .with_stroke_style(stroke_style),
            );
        }
        for segment in &self.segments {
            let path = segment.path;
            frame.lines.push(LinePrimitive::new(
                path.x1,
                path.y1,
                path.x2,
                path.y2,
                SEGMENT_STROKE_WIDTH_PX,
                segment.color,
            ));
        }

        for marker in &self.points {
            if let Some(hit) = marker.hit_region {
                frame
                    .circles
                    .push(CirclePrimitive::new(hit.x, hit.y, hit.radius, Color::TRANSPARENT));
            }
            frame.circles.push(CirclePrimitive::new(
                marker.x,
                marker.y,
                marker.radius,
                marker.color,
            ));
        }

        for label in &self.y_labels {
            frame.texts.push(self.label_text(label, TextHAlign::Right));
        }
        for label in self.x_labels.iter().filter(|label| !label.text.is_empty()) {
            frame.texts.push(self.label_text(label, TextHAlign::Center));
        }

        if let Some(tooltip) = &self.tooltip {
            self.push_tooltip(&mut frame, tooltip);
        }
        if let Some(progress) = &self.progress {
            self.push_progress(&mut frame, progress);
        }

        frame
    }

    fn label_text(&self, label: &AxisLabel, h_align: TextHAlign) -> TextPrimitive {
        TextPrimitive::new(
            label.text.clone(),
            label.x,
            label.y,
            LABEL_FONT_SIZE_PX,
            self.style.label_color,
            h_align,
        )
    }

    fn push_tooltip(&self, frame: &mut RenderFrame, tooltip: &Tooltip) {
        let longest = tooltip
            .formatted_value
            .chars()
            .count()
            .max(tooltip.label.chars().count());
        let width = longest as f64 * TOOLTIP_CHAR_WIDTH_PX + 2.0 * TOOLTIP_PADDING_PX;
        let top = tooltip.y - TOOLTIP_OFFSET_PX - TOOLTIP_HEIGHT_PX;

        frame.rects.push(
            RectPrimitive::new(
                tooltip.x - width / 2.0,
                top,
                width,
                TOOLTIP_HEIGHT_PX,
                self.style.tooltip_background,
            )
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
        );
        if !tooltip.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                tooltip.label.clone(),
                tooltip.x,
                top + TOOLTIP_PADDING_PX + LABEL_FONT_SIZE_PX,
                LABEL_FONT_SIZE_PX,
                self.style.label_color,
                TextHAlign::Center,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            tooltip.formatted_value.clone(),
            tooltip.x,
            top + TOOLTIP_HEIGHT_PX - TOOLTIP_PADDING_PX,
            TOOLTIP_FONT_SIZE_PX,
            tooltip.color,
            TextHAlign::Center,
        ));
    }

    fn push_progress(&self, frame: &mut RenderFrame, progress: &ProgressBar) {
        frame.rects.push(progress.track);
        if progress.fill.width > 0.0 {
            frame.rects.push(progress.fill);
        }

        let track = progress.track;
        let below = track.y + track.height + PROGRESS_TEXT_GAP_PX;
        frame.texts.push(TextPrimitive::new(
            progress.percentage_text.clone(),
            track.x + track.width,
            track.y - PROGRESS_TEXT_GAP_PX / 2.0,
            TOOLTIP_FONT_SIZE_PX,
            progress.fill.fill_color,
            TextHAlign::Right,
        ));
        for (text, x, h_align) in [
            (&progress.current_text, track.x, TextHAlign::Left),
            (
                &progress.remaining_text,
                track.x + track.width / 2.0,
                TextHAlign::Center,
            ),
            (&progress.goal_text, track.x + track.width, TextHAlign::Right),
        ] {
            frame.texts.push(TextPrimitive::new(
                text.clone(),
                x,
                below,
                LABEL_FONT_SIZE_PX,
                self.style.label_color,
                h_align,
            ));
        }
    }
}
