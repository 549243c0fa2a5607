use crate::error::{RingStatsError, RsResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_TREND_WINDOW: usize = 5;
pub const DEFAULT_SHOTS_PER_SERIES: u32 = 10;

/// Tunables for the statistics pipeline.
///
/// Hosts with a command line can `#[command(flatten)]` this; everything else
/// loads it from JSON or uses the defaults.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Width of the symmetric moving-average window for the trend line.
    #[arg(long, default_value_t = DEFAULT_TREND_WINDOW)]
    pub trend_window: usize,

    /// Shots assumed per series when no individual shots were recorded
    /// and the session has no discipline.
    #[arg(long, default_value_t = DEFAULT_SHOTS_PER_SERIES)]
    pub fallback_shots_per_series: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_window: DEFAULT_TREND_WINDOW,
            fallback_shots_per_series: DEFAULT_SHOTS_PER_SERIES,
        }
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> RsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RsResult<()> {
        if self.trend_window == 0 {
            warn!("Rejected config: trendWindow must be at least 1");
            return Err(RingStatsError::Config(
                "trendWindow must be at least 1".to_string(),
            ));
        }
        if self.fallback_shots_per_series == 0 {
            warn!("Rejected config: fallbackShotsPerSeries must be at least 1");
            return Err(RingStatsError::Config(
                "fallbackShotsPerSeries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
