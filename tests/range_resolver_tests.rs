use finance_chart::core::range::{DEFAULT_NICE_UNIT, FLAT_SERIES_PAD};
use finance_chart::core::{DataPoint, RangeMode, ValueRange, resolve_range};

fn series(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("p{i}"), *value))
        .collect()
}

fn nice() -> RangeMode {
    RangeMode::Nice {
        unit: DEFAULT_NICE_UNIT,
    }
}

fn assert_range(range: ValueRange, min_y: f64, max_y: f64) {
    assert!(
        (range.min_y - min_y).abs() <= 1e-9,
        "min_y: expected {min_y}, got {}",
        range.min_y
    );
    assert!(
        (range.max_y - max_y).abs() <= 1e-9,
        "max_y: expected {max_y}, got {}",
        range.max_y
    );
}

#[test]
fn empty_series_has_no_range() {
    assert!(resolve_range(&[], nice()).is_none());
    assert!(resolve_range(&[], RangeMode::FitData).is_none());
}

#[test]
fn series_without_finite_values_has_no_range() {
    let data = series(&[f64::NAN, f64::INFINITY]);
    assert!(resolve_range(&data, nice()).is_none());
}

#[test]
fn nice_mode_rounds_small_negative_down_to_full_unit() {
    let data = vec![
        DataPoint::new("Jan", 100.0),
        DataPoint::new("Feb", -50.0),
        DataPoint::new("Mar", 200.0),
    ];
    let range = resolve_range(&data, nice()).expect("range");
    assert_range(range, -1_000.0, 1_000.0);
}

#[test]
fn nice_mode_includes_zero_for_all_positive_series() {
    let range = resolve_range(&series(&[1_200.0, 3_400.0]), nice()).expect("range");
    assert_range(range, 0.0, 4_000.0);
}

#[test]
fn nice_mode_includes_zero_for_all_negative_series() {
    let range = resolve_range(&series(&[-1_500.0, -200.0]), nice()).expect("range");
    assert_range(range, -2_000.0, 0.0);
}

#[test]
fn nice_mode_keeps_exact_unit_boundaries() {
    assert_range(
        resolve_range(&series(&[1_000.0]), nice()).expect("range"),
        0.0,
        1_000.0,
    );
    assert_range(
        resolve_range(&series(&[-1_000.0]), nice()).expect("range"),
        -1_000.0,
        0.0,
    );
}

#[test]
fn nice_mode_widens_all_zero_series_to_one_unit() {
    let range = resolve_range(&series(&[0.0, 0.0, 0.0]), nice()).expect("range");
    assert_range(range, 0.0, 1_000.0);
}

#[test]
fn nice_mode_honors_custom_unit() {
    let range = resolve_range(&series(&[120.0, -30.0]), RangeMode::Nice { unit: 50.0 })
        .expect("range");
    assert_range(range, -50.0, 150.0);
}

#[test]
fn fit_mode_pads_ten_percent_each_side() {
    let range = resolve_range(&series(&[100.0, 200.0]), RangeMode::FitData).expect("range");
    assert_range(range, 90.0, 210.0);
}

#[test]
fn fit_mode_does_not_force_zero_into_view() {
    let range = resolve_range(&series(&[5_000.0, 6_000.0]), RangeMode::FitData).expect("range");
    assert!(range.min_y > 0.0);
    assert_range(range, 4_900.0, 6_100.0);
}

#[test]
fn fit_mode_flat_series_uses_absolute_pad() {
    let range = resolve_range(&series(&[500.0, 500.0]), RangeMode::FitData).expect("range");
    assert_range(range, 500.0 - FLAT_SERIES_PAD, 500.0 + FLAT_SERIES_PAD);
}

#[test]
fn fit_mode_tiny_span_is_widened_to_minimum_range() {
    let range = resolve_range(&series(&[10.0, 10.1]), RangeMode::FitData).expect("range");
    assert!((range.max_y - range.min_y - 1.0).abs() <= 1e-9);
    assert!(range.contains(10.0));
    assert!(range.contains(10.1));
}

#[test]
fn non_finite_values_are_ignored() {
    let range = resolve_range(&series(&[f64::NAN, 2_500.0]), nice()).expect("range");
    assert_range(range, 0.0, 3_000.0);
}

#[test]
fn range_mode_from_flags_selects_policy() {
    assert_eq!(RangeMode::from_flags(true, 1_000.0), RangeMode::FitData);
    assert_eq!(
        RangeMode::from_flags(false, 250.0),
        RangeMode::Nice { unit: 250.0 }
    );
    assert_eq!(RangeMode::default(), nice());
}

#[test]
fn ticks_are_evenly_spaced_and_end_exactly_at_max() {
    let range = ValueRange {
        min_y: -1_000.0,
        max_y: 1_000.0,
    };
    let ticks: Vec<f64> = range.ticks(5).collect();
    assert_eq!(ticks, vec![-1_000.0, -500.0, 0.0, 500.0, 1_000.0]);
}
