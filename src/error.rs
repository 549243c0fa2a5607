use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingStatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type RsResult<T> = Result<T, RingStatsError>;
