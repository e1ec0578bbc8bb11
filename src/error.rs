use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Cannot match a champion against itself")]
    SameChampion,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid champion data: {0}")]
    DataError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
