use super::aggregate::summarize_session;
use crate::types::SessionRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingPoint {
    pub avg_per_shot: f64,
    pub discipline_id: Option<String>,
    pub sleep: u8,
    pub energy: u8,
    pub stress: u8,
    pub motivation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPoint {
    pub quality: u8,
    /// Rings per shot of this one series.
    pub score_per_shot: f64,
    pub discipline_id: Option<String>,
}

/// Self-reported wellbeing next to the session's per-shot rate.
///
/// Only shooting sessions with a positive rate produce a point.
pub fn wellbeing_points(sessions: &[SessionRecord]) -> Vec<WellbeingPoint> {
    sessions
        .iter()
        .filter(|s| s.kind.is_shooting())
        .filter_map(|session| {
            let wellbeing = session.wellbeing?;
            let avg_per_shot = summarize_session(&session.series)
                .avg_per_shot
                .filter(|&rate| rate > 0.0)?;

            Some(WellbeingPoint {
                avg_per_shot,
                discipline_id: session.discipline_id().map(str::to_string),
                sleep: wellbeing.sleep,
                energy: wellbeing.energy,
                stress: wellbeing.stress,
                motivation: wellbeing.motivation,
            })
        })
        .collect()
}

/// One point per rated, scored series of a shooting session.
pub fn quality_points(sessions: &[SessionRecord]) -> Vec<QualityPoint> {
    sessions
        .iter()
        .filter(|s| s.kind.is_shooting())
        .flat_map(|session| {
            session.series.iter().filter_map(move |series| {
                if !series.is_scored() || series.shot_count == 0 {
                    return None;
                }
                let quality = series.execution_quality?;
                let score = series.score_total?;

                Some(QualityPoint {
                    quality,
                    score_per_shot: score / f64::from(series.shot_count),
                    discipline_id: session.discipline_id().map(str::to_string),
                })
            })
        })
        .collect()
}
