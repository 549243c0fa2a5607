mod common;

use common::{air_rifle, assert_close, prone_300m};
use ringstats::scoring::{
    course_shots, display_value, effective_display_mode, max_series_score, per_shot_rate, project,
    project_series,
};
use ringstats::types::DisplayMode;

#[test]
fn test_per_shot_rate() {
    assert_eq!(per_shot_rate(0.0, 0), None);
    assert_eq!(per_shot_rate(190.0, 0), None);
    assert_close(per_shot_rate(190.0, 20).unwrap(), 9.5);
}

#[test]
fn test_project_tenth_ring_keeps_one_decimal() {
    // 10.27 * 60 = 616.2
    assert_eq!(project(10.27, &air_rifle()), 616.2);
    assert_eq!(course_shots(&air_rifle()), 60);
}

#[test]
fn test_project_whole_ring_rounds_to_integer() {
    // 9.71 * 60 = 582.6
    assert_eq!(project(9.71, &prone_300m()), 583.0);
}

#[test]
fn test_project_series() {
    assert_eq!(project_series(10.27, &air_rifle()), 102.7);
    // 9.71 * 20 = 194.2
    assert_eq!(project_series(9.71, &prone_300m()), 194.0);
}

#[test]
fn test_round_trip_over_full_course() {
    let discipline = air_rifle();
    let total = 618.3;
    let rate = per_shot_rate(total, course_shots(&discipline)).unwrap();
    assert!((project(rate, &discipline) - total).abs() <= 0.1);
}

#[test]
fn test_max_series_score() {
    assert_eq!(max_series_score(&air_rifle()), 109.0);
    assert_eq!(max_series_score(&prone_300m()), 200.0);
}

#[test]
fn test_projection_requires_discipline() {
    let d = air_rifle();
    assert_eq!(effective_display_mode(DisplayMode::Projected, None), DisplayMode::PerShot);
    assert_eq!(effective_display_mode(DisplayMode::Projected, Some(&d)), DisplayMode::Projected);
    assert_eq!(effective_display_mode(DisplayMode::PerShot, Some(&d)), DisplayMode::PerShot);
}

#[test]
fn test_display_value() {
    let d = air_rifle();
    assert_eq!(display_value(10.27, DisplayMode::PerShot, Some(&d)), 10.27);
    assert_eq!(display_value(10.27, DisplayMode::Projected, Some(&d)), 616.2);
    assert_eq!(display_value(10.27, DisplayMode::Projected, None), 10.27);
}
