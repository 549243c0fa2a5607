use super::decimal::parse_shot;
use crate::types::{ScoringType, SessionRecord};
use chrono::NaiveDateTime;
use serde::Serialize;

pub const RING_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingDistribution {
    /// Parseable shots only.
    pub total_shots: u32,
    pub counts: [u32; RING_COUNT],
    /// One-decimal share of `total_shots` per ring, index = ring.
    pub percentages: [f64; RING_COUNT],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionPoint {
    pub date: NaiveDateTime,
    pub session_id: String,
    pub discipline_id: Option<String>,
    #[serde(flatten)]
    pub distribution: RingDistribution,
}

/// Ring a single shot value lands in.
///
/// Tenth-ring values floor (a 9.5 is a 9 with bonus tenths); whole-ring
/// values round. Always within `0..=10`.
#[inline]
pub fn ring_of(value: f64, scoring: ScoringType) -> usize {
    let ring = if scoring.is_decimal() {
        value.floor()
    } else {
        value.round()
    };
    ring.clamp(0.0, 10.0) as usize
}

/// Hit counts per ring (index 0..=10). Unparseable shots are not counted.
pub fn bucketize<S: AsRef<str>>(shots: &[S], scoring: ScoringType) -> [u32; RING_COUNT] {
    let mut counts = [0u32; RING_COUNT];
    for value in shots.iter().filter_map(|s| parse_shot(s.as_ref())) {
        counts[ring_of(value, scoring)] += 1;
    }
    counts
}

/// `count / total` as a percentage with one decimal.
pub fn percent(count: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((f64::from(count) / f64::from(total) * 1000.0).round() / 10.0)
}

/// `None` when nothing parseable was recorded: such a session has no row.
pub fn distribution_row<S: AsRef<str>>(
    shots: &[S],
    scoring: ScoringType,
) -> Option<RingDistribution> {
    let counts = bucketize(shots, scoring);
    let total_shots: u32 = counts.iter().sum();

    let mut percentages = [0.0; RING_COUNT];
    for (slot, &count) in percentages.iter_mut().zip(counts.iter()) {
        *slot = percent(count, total_shots)?;
    }

    Some(RingDistribution {
        total_shots,
        counts,
        percentages,
    })
}

/// Ring distribution of every session's non-practice shots, input order kept.
pub fn shot_distribution(sessions: &[SessionRecord]) -> Vec<DistributionPoint> {
    sessions
        .iter()
        .filter_map(|session| {
            let shots: Vec<&str> = session
                .series
                .iter()
                .filter(|s| !s.is_practice)
                .flat_map(|s| s.shots.iter().map(String::as_str))
                .collect();

            distribution_row(&shots, session.scoring_type()).map(|distribution| DistributionPoint {
                date: session.date,
                session_id: session.id.clone(),
                discipline_id: session.discipline_id().map(str::to_string),
                distribution,
            })
        })
        .collect()
}
