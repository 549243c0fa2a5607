use crate::config::DEFAULT_SHOTS_PER_SERIES;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

/// How individual shots are scored.
///
/// - `Whole`: integer rings 0..=10
/// - `Tenth`: each ring subdivided into tenths, 0.0..=10.9
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoringType {
    #[default]
    Whole,
    Tenth,
}

impl ScoringType {
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Tenth)
    }

    /// Best possible single shot.
    pub fn max_shot_value(&self) -> f64 {
        match self {
            Self::Whole => 10.0,
            Self::Tenth => 10.9,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum SessionKind {
    #[default]
    #[strum(serialize = "TRAINING")]
    #[serde(rename = "TRAINING")]
    Training,
    #[strum(serialize = "WETTKAMPF")]
    #[serde(rename = "WETTKAMPF")]
    Competition,
    #[strum(serialize = "TROCKENTRAINING")]
    #[serde(rename = "TROCKENTRAINING")]
    DryFire,
    #[strum(serialize = "MENTAL")]
    #[serde(rename = "MENTAL")]
    Mental,
}

impl SessionKind {
    /// Kinds in which live rounds are fired and scored.
    pub fn is_shooting(&self) -> bool {
        matches!(self, Self::Training | Self::Competition)
    }
}

/// Which unit a chart view is expressed in. One view never mixes both.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    PerShot,
    Projected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: String,
    pub name: String,
    pub series_count: u32,
    pub shots_per_series: u32,
    pub scoring_type: ScoringType,
}

/// One scored (or not yet scored) series of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub position: u32,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub score_total: Option<f64>,
    #[builder(default = false)]
    #[serde(default)]
    pub is_practice: bool,
    #[builder(default = DEFAULT_SHOTS_PER_SERIES)]
    #[serde(default = "default_shot_count")]
    pub shot_count: u32,
    /// Raw individual shot values as entered.
    #[builder(default)]
    #[serde(default)]
    pub shots: Vec<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub execution_quality: Option<u8>,
}

fn default_shot_count() -> u32 {
    DEFAULT_SHOTS_PER_SERIES
}

impl SeriesResult {
    /// Counts toward totals, statistics and rates.
    pub fn is_scored(&self) -> bool {
        !self.is_practice && self.score_total.is_some_and(f64::is_finite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wellbeing {
    pub sleep: u8,
    pub energy: u8,
    pub stress: u8,
    pub motivation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[builder(setter(into))]
    pub id: String,
    pub date: NaiveDateTime,
    #[builder(default)]
    #[serde(default)]
    pub kind: SessionKind,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub discipline: Option<Discipline>,
    #[builder(default)]
    #[serde(default)]
    pub series: Vec<SeriesResult>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub wellbeing: Option<Wellbeing>,
}

impl SessionRecord {
    pub fn discipline_id(&self) -> Option<&str> {
        self.discipline.as_ref().map(|d| d.id.as_str())
    }

    pub fn scoring_type(&self) -> ScoringType {
        self.discipline
            .as_ref()
            .map(|d| d.scoring_type)
            .unwrap_or_default()
    }
}

/// A session's normalized score, ready for smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    pub date: NaiveDateTime,
    pub avg_per_shot: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    pub value: Option<f64>,
    pub trend: Option<f64>,
}
