#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use ringstats::types::{Discipline, ScoringType, SeriesResult, SessionKind, SessionRecord};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(h, min, 0))
        .expect("valid test date")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Air rifle 60: 6 series of 10 shots, tenth-ring.
pub fn air_rifle() -> Discipline {
    Discipline {
        id: "lg60".to_string(),
        name: "Luftgewehr 60".to_string(),
        series_count: 6,
        shots_per_series: 10,
        scoring_type: ScoringType::Tenth,
    }
}

/// 300m prone: 3 series of 20 shots, whole-ring.
pub fn prone_300m() -> Discipline {
    Discipline {
        id: "g300".to_string(),
        name: "Gewehr 300m liegend".to_string(),
        series_count: 3,
        shots_per_series: 20,
        scoring_type: ScoringType::Whole,
    }
}

pub fn scored(position: u32, score: f64) -> SeriesResult {
    SeriesResult::builder()
        .position(position)
        .score_total(score)
        .build()
}

pub fn practice(position: u32, score: f64) -> SeriesResult {
    SeriesResult::builder()
        .position(position)
        .score_total(score)
        .is_practice(true)
        .build()
}

pub fn unscored(position: u32) -> SeriesResult {
    SeriesResult::builder().position(position).build()
}

pub fn with_shots(position: u32, shots: &[&str]) -> SeriesResult {
    SeriesResult::builder()
        .position(position)
        .shots(shots.iter().map(|s| s.to_string()).collect())
        .build()
}

pub fn session(id: &str, date: NaiveDateTime, series: Vec<SeriesResult>) -> SessionRecord {
    SessionRecord::builder().id(id).date(date).series(series).build()
}

pub fn session_in(
    id: &str,
    date: NaiveDateTime,
    kind: SessionKind,
    discipline: Discipline,
    series: Vec<SeriesResult>,
) -> SessionRecord {
    SessionRecord::builder()
        .id(id)
        .date(date)
        .kind(kind)
        .discipline(discipline)
        .series(series)
        .build()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
