use ordered_float::OrderedFloat;

use crate::core::DataPoint;

use super::currency_format::format_currency;
use super::render_scene::{PointMarker, RenderScene, Tooltip};

/// Tooltip projection for a pressed marker.
#[must_use]
pub fn tooltip_for(marker: &PointMarker) -> Tooltip {
    Tooltip {
        x: marker.x,
        y: marker.y,
        formatted_value: format_currency(marker.value),
        label: marker.label.clone(),
        color: marker.color,
    }
}

/// Hit-tests `(x, y)` against the scene's marker hit-regions.
///
/// The nearest containing marker wins; equal distances resolve to the lower
/// index. Markers without a hit-region never match.
#[must_use]
pub fn project_point(scene: &RenderScene, x: f64, y: f64) -> Option<DataPoint> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    scene
        .points
        .iter()
        .filter_map(|marker| {
            let hit = marker.hit_region?;
            hit.contains(x, y)
                .then(|| (OrderedFloat(hit.distance_to(x, y)), marker))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, marker)| marker.data_point())
}

pub(super) fn find_highlighted_marker<'a>(
    markers: &'a [PointMarker],
    highlighted: &DataPoint,
) -> Option<&'a PointMarker> {
    markers
        .iter()
        .find(|marker| marker.label == highlighted.label && marker.value == highlighted.value)
}
