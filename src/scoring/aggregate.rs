use super::decimal::{parse_shot, round_to_tenth, Millis};
use super::normalize::per_shot_rate;
use crate::types::SeriesResult;
use serde::Serialize;

/// Per-session figures the charts are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// `None` when no non-practice series carries a score (e.g. dry fire).
    pub total_score: Option<f64>,
    pub avg_per_shot: Option<f64>,
    pub total_non_practice_shots: u32,
}

/// Session total: every non-practice series, unscored ones counting 0.
pub fn total_score(series: &[SeriesResult]) -> f64 {
    series
        .iter()
        .filter(|s| !s.is_practice)
        .filter_map(|s| s.score_total.and_then(Millis::from_f64))
        .sum::<Millis>()
        .to_tenths()
        .to_f64()
}

/// Arithmetic mean of the present values, unrounded.
pub fn average(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Adds up raw shot strings; unreadable entries count 0.
pub fn sum_from_shots<S: AsRef<str>>(shots: &[S]) -> f64 {
    let sum: f64 = shots.iter().filter_map(|s| parse_shot(s.as_ref())).sum();
    round_to_tenth(sum)
}

/// Recorded shots are the exact count; otherwise the discipline default.
pub fn resolve_shot_count<S>(shots: &[S], fallback: u32) -> u32 {
    if shots.is_empty() {
        fallback
    } else {
        u32::try_from(shots.len()).unwrap_or(u32::MAX)
    }
}

pub fn summarize_session(series: &[SeriesResult]) -> SessionSummary {
    let mut total = Millis::ZERO;
    let mut shots: u32 = 0;
    let mut scored = 0usize;

    for s in series.iter().filter(|s| s.is_scored()) {
        if let Some(t) = s.score_total.and_then(Millis::from_f64) {
            total = total + t;
        }
        shots = shots.saturating_add(s.shot_count);
        scored += 1;
    }

    if scored == 0 {
        return SessionSummary::default();
    }

    let total_score = total.to_tenths().to_f64();
    SessionSummary {
        total_score: Some(total_score),
        avg_per_shot: per_shot_rate(total_score, shots),
        total_non_practice_shots: shots,
    }
}
