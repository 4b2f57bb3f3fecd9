use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreakError>;

#[derive(Error, Debug)]
pub enum StreakError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub API error: {0}")]
    Api(String),
    #[error("GitHub token is missing. Set GITHUB_TOKEN or pass --token")]
    MissingToken,
    #[error("Invalid GitHub API response: {0}")]
    InvalidResponse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for StreakError {
    fn from(err: toml::de::Error) -> Self {
        StreakError::Config(err.to_string())
    }
}

impl From<humantime::DurationError> for StreakError {
    fn from(err: humantime::DurationError) -> Self {
        StreakError::Config(format!("invalid duration: {err}"))
    }
}
