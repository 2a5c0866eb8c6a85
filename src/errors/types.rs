use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimcheckError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Invalid score inputs: lcs {lcs} exceeds the shorter of {len1} and {len2}")]
    InvalidScore { lcs: usize, len1: usize, len2: usize },

    #[error("Similarity score {0} is outside 0..=100")]
    ScoreOutOfRange(f64),

    #[error("Invalid symbol pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
