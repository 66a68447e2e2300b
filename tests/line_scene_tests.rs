use finance_chart::api::{
    ChartConfig, HIT_REGION_RADIUS_PX, MARKER_RADIUS_PX, ReferenceLineKind, compute_scene,
    format_currency,
};
use finance_chart::core::{Canvas, DataPoint, SegmentBand, SegmentColors};
use finance_chart::render::Color;

fn canvas() -> Canvas {
    Canvas::new(400.0, 300.0).with_padding(20.0, 60.0, 20.0, 40.0)
}

fn quarter() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 100.0),
        DataPoint::new("Feb", -50.0),
        DataPoint::new("Mar", 200.0),
    ]
}

fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9
}

#[test]
fn empty_series_yields_empty_scene() {
    let scene = compute_scene(&ChartConfig::line(Vec::new()).with_target(1_000.0));
    assert!(scene.is_empty());
    assert!(scene.range.is_none());
}

#[test]
fn scene_counts_match_series_length() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_canvas(canvas()));

    assert_eq!(scene.points.len(), 3);
    assert_eq!(scene.segments.len(), 2);
    assert_eq!(scene.grid_lines.len(), 5);
    assert_eq!(scene.y_labels.len(), 5);
    assert_eq!(scene.x_labels.len(), 3);
}

#[test]
fn segments_connect_consecutive_mapped_points() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_canvas(canvas()));

    let first = scene.segments[0].path;
    assert!(approx_eq(first.x1, 60.0) && approx_eq(first.y1, 128.0));
    assert!(approx_eq(first.x2, 220.0) && approx_eq(first.y2, 146.0));

    let second = scene.segments[1].path;
    assert!(approx_eq(second.x1, 220.0) && approx_eq(second.y1, 146.0));
    assert!(approx_eq(second.x2, 380.0) && approx_eq(second.y2, 116.0));
}

#[test]
fn segments_use_single_neutral_color_while_markers_are_classified() {
    let config = ChartConfig::line(quarter())
        .with_canvas(canvas())
        .with_target(150.0);
    let scene = compute_scene(&config);

    for segment in &scene.segments {
        assert_eq!(segment.color, config.theme.primary_color);
    }

    let bands: Vec<SegmentBand> = scene.points.iter().map(|marker| marker.band).collect();
    assert_eq!(
        bands,
        vec![
            SegmentBand::BetweenGoalAndZero,
            SegmentBand::BelowZero,
            SegmentBand::AboveGoal,
        ]
    );
    let colors = SegmentColors::default();
    assert_eq!(scene.points[0].color, colors.between_goal_and_zero);
    assert_eq!(scene.points[1].color, colors.below_zero);
    assert_eq!(scene.points[2].color, colors.above_goal);
}

#[test]
fn explicit_line_color_overrides_theme() {
    let stroke = Color::rgb(0.1, 0.2, 0.3);
    let scene = compute_scene(&ChartConfig::line(quarter()).with_line_color(stroke));
    assert!(scene.segments.iter().all(|segment| segment.color == stroke));
}

#[test]
fn markers_carry_visible_radius_and_hit_region_on_same_center() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_canvas(canvas()));

    for marker in &scene.points {
        assert_eq!(marker.radius, MARKER_RADIUS_PX);
        let hit = marker.hit_region.expect("hit region");
        assert_eq!(hit.radius, HIT_REGION_RADIUS_PX);
        assert_eq!((hit.x, hit.y), (marker.x, marker.y));
        assert!(hit.radius > marker.radius);
    }
}

#[test]
fn tooltips_off_removes_hit_regions() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_tooltips(false));
    assert!(scene.points.iter().all(|marker| marker.hit_region.is_none()));
}

#[test]
fn gridlines_span_range_with_values() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_canvas(canvas()));

    let values: Vec<f64> = scene.grid_lines.iter().map(|grid| grid.value).collect();
    assert_eq!(values, vec![-1_000.0, -500.0, 0.0, 500.0, 1_000.0]);
    let ys: Vec<f64> = scene.grid_lines.iter().map(|grid| grid.y).collect();
    for (actual, expected) in ys.iter().zip([260.0, 200.0, 140.0, 80.0, 20.0]) {
        assert!(approx_eq(*actual, expected), "{actual} != {expected}");
    }
}

#[test]
fn grid_toggle_removes_only_gridlines() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_grid(false));
    assert!(scene.grid_lines.is_empty());
    assert_eq!(scene.y_labels.len(), 5);
}

#[test]
fn y_labels_below_zero_that_round_away_keep_minus_sign() {
    let config = ChartConfig::line(vec![DataPoint::new("a", -10.0), DataPoint::new("b", 10.0)])
        .with_fit_data_range(true)
        .with_canvas(canvas());
    let scene = compute_scene(&config);

    // Fit range is [-12, 12]; ticks are -12, -6, 0, 6, 12.
    let texts: Vec<String> = scene.y_labels.iter().map(|label| label.text.clone()).collect();
    assert_eq!(texts[0], "-0\u{a0}€");
    assert_eq!(texts[1], "-0\u{a0}€");
    assert_eq!(texts[2], "0\u{a0}€");
}

#[test]
fn y_labels_round_to_nearest_hundred_before_formatting() {
    let config = ChartConfig::line(vec![DataPoint::new("a", 120.0), DataPoint::new("b", 1_240.0)])
        .with_fit_data_range(true)
        .with_canvas(canvas());
    let scene = compute_scene(&config);

    // Fit range is [8, 1352]; ticks are 8, 344, 680, 1016, 1352.
    let texts: Vec<String> = scene.y_labels.iter().map(|label| label.text.clone()).collect();
    assert_eq!(
        texts,
        vec![
            format_currency(0.0),
            format_currency(300.0),
            format_currency(700.0),
            format_currency(1_000.0),
            format_currency(1_400.0),
        ]
    );
    assert!(scene.y_labels.iter().all(|label| approx_eq(label.x, 52.0)));
}

#[test]
fn x_labels_use_point_labels_verbatim() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_canvas(canvas()));

    let texts: Vec<&str> = scene.x_labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["Jan", "Feb", "Mar"]);
    assert!(scene.x_labels.iter().all(|label| approx_eq(label.y, 280.0)));
    assert!(approx_eq(scene.x_labels[1].x, 220.0));
}

#[test]
fn labels_toggle_removes_both_axes() {
    let scene = compute_scene(&ChartConfig::line(quarter()).with_labels(false));
    assert!(scene.y_labels.is_empty());
    assert!(scene.x_labels.is_empty());
}

#[test]
fn zero_line_is_emitted_even_outside_visible_range() {
    let config = ChartConfig::line(vec![
        DataPoint::new("a", 5_000.0),
        DataPoint::new("b", 6_000.0),
    ])
    .with_fit_data_range(true)
    .with_canvas(canvas());
    let scene = compute_scene(&config);

    let zero = scene
        .reference_lines
        .iter()
        .find(|line| line.kind == ReferenceLineKind::Zero)
        .expect("zero line");
    assert!(zero.y > 260.0, "zero lies below the chart area");
}

#[test]
fn goal_line_requires_target_and_toggle() {
    let without_target = compute_scene(&ChartConfig::line(quarter()));
    assert!(
        without_target
            .reference_lines
            .iter()
            .all(|line| line.kind != ReferenceLineKind::Goal)
    );

    let with_target = compute_scene(
        &ChartConfig::line(quarter())
            .with_canvas(canvas())
            .with_target(500.0),
    );
    let goal = with_target
        .reference_lines
        .iter()
        .find(|line| line.kind == ReferenceLineKind::Goal)
        .expect("goal line");
    assert!(approx_eq(goal.y, 80.0));
    assert_eq!(goal.value, 500.0);

    let toggled_off = compute_scene(
        &ChartConfig::line(quarter())
            .with_target(500.0)
            .with_goal_line(false),
    );
    assert!(
        toggled_off
            .reference_lines
            .iter()
            .all(|line| line.kind != ReferenceLineKind::Goal)
    );
}

#[test]
fn zero_line_toggle_is_independent() {
    let scene = compute_scene(
        &ChartConfig::line(quarter())
            .with_target(500.0)
            .with_zero_line(false),
    );
    assert_eq!(scene.reference_lines.len(), 1);
    assert_eq!(scene.reference_lines[0].kind, ReferenceLineKind::Goal);
}

#[test]
fn single_point_has_marker_at_left_padding_and_no_segments() {
    let scene = compute_scene(
        &ChartConfig::line(vec![DataPoint::new("Jan", 500.0)]).with_canvas(canvas()),
    );

    assert_eq!(scene.points.len(), 1);
    assert!(scene.segments.is_empty());
    assert!(approx_eq(scene.points[0].x, 60.0));
    assert!(scene.points[0].y.is_finite());
}

#[test]
fn flat_fit_series_produces_finite_geometry() {
    let scene = compute_scene(
        &ChartConfig::line(vec![DataPoint::new("a", 300.0), DataPoint::new("b", 300.0)])
            .with_fit_data_range(true),
    );
    let range = scene.range.expect("range");
    assert_eq!((range.min_y, range.max_y), (299.0, 301.0));
    assert!(scene.points.iter().all(|marker| marker.y.is_finite()));
}

#[test]
fn non_finite_points_are_skipped_along_with_their_segments() {
    let scene = compute_scene(&ChartConfig::line(vec![
        DataPoint::new("a", 100.0),
        DataPoint::new("b", f64::NAN),
        DataPoint::new("c", 300.0),
        DataPoint::new("d", 400.0),
    ]));

    assert_eq!(scene.points.len(), 3);
    assert_eq!(scene.segments.len(), 1);
    assert_eq!(scene.points[1].index, 2);
}

#[test]
fn highlighted_point_produces_tooltip_overlay() {
    let config = ChartConfig::line(quarter())
        .with_canvas(canvas())
        .with_highlighted_point(Some(DataPoint::new("Feb", -50.0)));
    let scene = compute_scene(&config);

    let tooltip = scene.tooltip.expect("tooltip");
    assert!(approx_eq(tooltip.x, 220.0));
    assert!(approx_eq(tooltip.y, 146.0));
    assert_eq!(tooltip.label, "Feb");
    assert_eq!(tooltip.formatted_value, "-50\u{a0}€");
    assert_eq!(tooltip.color, config.segment_colors.below_zero);
}

#[test]
fn unknown_or_disabled_highlight_yields_no_tooltip() {
    let unknown = compute_scene(
        &ChartConfig::line(quarter()).with_highlighted_point(Some(DataPoint::new("Apr", 1.0))),
    );
    assert!(unknown.tooltip.is_none());

    let disabled = compute_scene(
        &ChartConfig::line(quarter())
            .with_tooltips(false)
            .with_highlighted_point(Some(DataPoint::new("Jan", 100.0))),
    );
    assert!(disabled.tooltip.is_none());
}

#[test]
fn compute_scene_leaves_config_untouched() {
    let config = ChartConfig::line(quarter()).with_target(150.0);
    let before = config.clone();
    let _ = compute_scene(&config);
    assert_eq!(config, before);
}
