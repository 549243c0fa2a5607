use super::decimal::{round_to_tenth, Millis};
use crate::types::{SeriesResult, SessionRecord};
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

/// Spread of results at one series position across many sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub position: u32,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    /// Number of sessions contributing a value at this position.
    pub count: usize,
}

pub fn series_stats(sessions: &[SessionRecord]) -> Vec<SeriesStats> {
    collect_stats(sessions.iter().flat_map(|s| s.series.iter()))
}

/// Same as [`series_stats`] for callers holding bare series lists.
pub fn series_stats_from(sessions: &[&[SeriesResult]]) -> Vec<SeriesStats> {
    collect_stats(sessions.iter().flat_map(|s| s.iter()))
}

fn collect_stats<'a, I>(series: I) -> Vec<SeriesStats>
where
    I: Iterator<Item = &'a SeriesResult>,
{
    // Grouped by the stored position, not the index within a session.
    let by_position = series
        .filter(|s| s.is_scored())
        .filter_map(|s| s.score_total.map(|v| (s.position, v)))
        .into_group_map();

    by_position
        .into_iter()
        .sorted_by_key(|(position, _)| *position)
        .filter_map(|(position, values)| {
            let (min, max) = match values.iter().copied().minmax() {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(v) => (v, v),
                MinMaxResult::MinMax(lo, hi) => (lo, hi),
            };
            let sum: Millis = values.iter().filter_map(|&v| Millis::from_f64(v)).sum();
            let count = values.len();

            Some(SeriesStats {
                position,
                min,
                max,
                avg: round_to_tenth(sum.to_f64() / count as f64),
                count,
            })
        })
        .collect()
}
