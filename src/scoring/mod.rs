//! Pure numeric transforms from raw series data to comparable metrics.
//!
//! Nothing in here performs I/O or keeps state; every function reads its
//! arguments and returns a fresh value.

pub mod aggregate;
pub mod buckets;
pub mod correlation;
pub mod decimal;
pub mod normalize;
pub mod series;
pub mod trend;

pub use self::aggregate::{
    average, resolve_shot_count, sum_from_shots, summarize_session, total_score, SessionSummary,
};
pub use self::buckets::{
    bucketize, distribution_row, percent, ring_of, shot_distribution, DistributionPoint,
    RingDistribution, RING_COUNT,
};
pub use self::correlation::{quality_points, wellbeing_points, QualityPoint, WellbeingPoint};
pub use self::decimal::{parse_shot, round_to_tenth, Millis, Tenths};
pub use self::normalize::{
    course_shots, display_value, effective_display_mode, max_series_score, per_shot_rate, project,
    project_series,
};
pub use self::series::{series_stats, series_stats_from, SeriesStats};
pub use self::trend::{moving_average, smooth_points};
