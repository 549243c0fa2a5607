//! Wires the scoring components together the way the statistics page
//! consumes them. The components themselves never depend on this module.

use crate::config::EngineConfig;
use crate::filter::StatsFilter;
use crate::scoring::{
    course_shots, display_value, effective_display_mode, project_series, quality_points,
    resolve_shot_count, series_stats, shot_distribution, smooth_points, summarize_session,
    wellbeing_points, DistributionPoint, QualityPoint, SeriesStats, SessionSummary, WellbeingPoint,
};
use crate::types::{Discipline, DisplayMode, ScorePoint, SessionKind, SessionRecord, TrendPoint};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    pub session_id: String,
    pub date: NaiveDateTime,
    pub kind: SessionKind,
    pub discipline_id: Option<String>,
    #[serde(flatten)]
    pub summary: SessionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingRow {
    #[serde(flatten)]
    pub point: WellbeingPoint,
    pub display_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRow {
    #[serde(flatten)]
    pub point: QualityPoint,
    pub display_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Unit of every display value in this report.
    pub display_mode: DisplayMode,
    /// Full course length when projecting.
    pub course_shots: Option<u32>,
    pub sessions: Vec<SessionRow>,
    /// Sessions with a per-shot rate, in display units, with the trend line.
    pub trend: Vec<TrendPoint>,
    pub series_stats: Vec<SeriesStats>,
    pub shot_distribution: Vec<DistributionPoint>,
    pub wellbeing: Vec<WellbeingRow>,
    pub quality: Vec<QualityRow>,
}

pub fn build_report(
    sessions: &[SessionRecord],
    filter: &StatsFilter,
    requested_mode: DisplayMode,
    config: &EngineConfig,
) -> StatsReport {
    let mut selected: Vec<SessionRecord> = filter
        .apply(sessions)
        .into_iter()
        .map(|s| with_resolved_shot_counts(s, config.fallback_shots_per_series))
        .collect();
    selected.sort_by_key(|s| s.date);
    debug!(
        "Report: {} of {} sessions pass the filter",
        selected.len(),
        sessions.len()
    );

    let discipline = selected_discipline(&selected, filter);
    let mode = effective_display_mode(requested_mode, discipline);

    let rows: Vec<SessionRow> = selected
        .iter()
        .map(|s| SessionRow {
            session_id: s.id.clone(),
            date: s.date,
            kind: s.kind,
            discipline_id: s.discipline_id().map(str::to_string),
            summary: summarize_session(&s.series),
        })
        .collect();

    // Only sessions with a rate enter the trend; one unit for the whole line.
    let points: Vec<ScorePoint> = rows
        .iter()
        .filter_map(|row| {
            row.summary.avg_per_shot.map(|rate| ScorePoint {
                date: row.date,
                avg_per_shot: Some(display_value(rate, mode, discipline)),
            })
        })
        .collect();
    let trend = smooth_points(&points, config.trend_window);
    debug!(
        "Report: {} trend points, window {}",
        trend.len(),
        config.trend_window
    );

    let wellbeing = wellbeing_points(&selected)
        .into_iter()
        .map(|point| WellbeingRow {
            display_score: display_value(point.avg_per_shot, mode, discipline),
            point,
        })
        .collect();

    let quality = quality_points(&selected)
        .into_iter()
        .map(|point| {
            let display_score = match (mode, discipline) {
                (DisplayMode::Projected, Some(d)) => project_series(point.score_per_shot, d),
                _ => point.score_per_shot,
            };
            QualityRow {
                point,
                display_score,
            }
        })
        .collect();

    StatsReport {
        display_mode: mode,
        course_shots: match mode {
            DisplayMode::Projected => discipline.map(course_shots),
            DisplayMode::PerShot => None,
        },
        sessions: rows,
        trend,
        series_stats: series_stats(&selected),
        shot_distribution: shot_distribution(&selected),
        wellbeing,
        quality,
    }
}

/// Projection is only meaningful when the view is narrowed to one discipline.
fn selected_discipline<'a>(
    sessions: &'a [SessionRecord],
    filter: &StatsFilter,
) -> Option<&'a Discipline> {
    let id = filter.discipline_id.as_deref()?;
    sessions
        .iter()
        .filter_map(|s| s.discipline.as_ref())
        .find(|d| d.id == id)
}

/// Recorded shots override the stored shot count; otherwise the
/// discipline's shots per series, then the configured fallback.
fn with_resolved_shot_counts(session: &SessionRecord, fallback: u32) -> SessionRecord {
    let per_series = session
        .discipline
        .as_ref()
        .map_or(fallback, |d| d.shots_per_series);

    let mut resolved = session.clone();
    for series in &mut resolved.series {
        series.shot_count = resolve_shot_count(&series.shots, per_series);
    }
    resolved
}
