use super::decimal::round_to_tenth;
use crate::types::{Discipline, DisplayMode, ScoringType};

/// Rings per shot; the unit that compares across disciplines.
pub fn per_shot_rate(total_score: f64, total_shots: u32) -> Option<f64> {
    if total_shots == 0 {
        return None;
    }
    Some(total_score / f64::from(total_shots))
}

/// Shots in one full course of the discipline.
pub fn course_shots(discipline: &Discipline) -> u32 {
    discipline
        .shots_per_series
        .saturating_mul(discipline.series_count)
}

/// Per-shot rate expressed as points over the discipline's full course.
pub fn project(rate_per_shot: f64, discipline: &Discipline) -> f64 {
    round_for(
        rate_per_shot * f64::from(course_shots(discipline)),
        discipline.scoring_type,
    )
}

/// Per-shot rate expressed as points over a single series.
pub fn project_series(rate_per_shot: f64, discipline: &Discipline) -> f64 {
    round_for(
        rate_per_shot * f64::from(discipline.shots_per_series),
        discipline.scoring_type,
    )
}

/// Best attainable series result.
pub fn max_series_score(discipline: &Discipline) -> f64 {
    round_to_tenth(
        f64::from(discipline.shots_per_series) * discipline.scoring_type.max_shot_value(),
    )
}

/// Projection needs a fixed course length, so it requires a discipline.
pub fn effective_display_mode(
    requested: DisplayMode,
    discipline: Option<&Discipline>,
) -> DisplayMode {
    match (requested, discipline) {
        (DisplayMode::Projected, Some(_)) => DisplayMode::Projected,
        _ => DisplayMode::PerShot,
    }
}

pub fn display_value(
    rate_per_shot: f64,
    mode: DisplayMode,
    discipline: Option<&Discipline>,
) -> f64 {
    match (effective_display_mode(mode, discipline), discipline) {
        (DisplayMode::Projected, Some(d)) => project(rate_per_shot, d),
        _ => rate_per_shot,
    }
}

fn round_for(value: f64, scoring: ScoringType) -> f64 {
    match scoring {
        ScoringType::Tenth => round_to_tenth(value),
        ScoringType::Whole => value.round(),
    }
}
