use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    #[error("Malformed candidate amount: {0}")]
    ParseDecimal(#[from] bigdecimal::ParseBigDecimalError),

    #[error("No candidate amounts supplied")]
    EmptyCandidates,

    #[error("Quote error: {0}")]
    Quote(String),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Other: {0}")]
    Other(String),
}
