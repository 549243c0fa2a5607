use super::decimal::round_to_tenth;
use crate::types::{ScorePoint, TrendPoint};

/// Symmetric moving average, same length as `values`.
///
/// The window is truncated at the edges, never padded. Missing and non-finite
/// values are skipped without shrinking the window, and a position only reports once
/// at least `ceil(window_size / 2)` real values back it.
pub fn moving_average(values: &[Option<f64>], window_size: usize) -> Vec<Option<f64>> {
    if values.is_empty() || window_size == 0 {
        return Vec::new();
    }

    let half = window_size / 2;
    let min_required = window_size.div_ceil(2);
    let last = values.len() - 1;

    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(last);

            let (sum, count) = values[start..=end]
                .iter()
                .flatten()
                .filter(|v| v.is_finite())
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

            if count < min_required {
                return None;
            }
            Some(round_to_tenth(sum / count as f64))
        })
        .collect()
}

/// Pairs each dated score with its smoothed value.
pub fn smooth_points(points: &[ScorePoint], window_size: usize) -> Vec<TrendPoint> {
    let values: Vec<Option<f64>> = points.iter().map(|p| p.avg_per_shot).collect();
    let trend = moving_average(&values, window_size);

    points
        .iter()
        .zip(trend)
        .map(|(p, trend)| TrendPoint {
            date: p.date,
            value: p.avg_per_shot,
            trend,
        })
        .collect()
}
