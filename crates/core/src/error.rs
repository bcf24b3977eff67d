#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),
    #[error("vitals columns differ in length: {labels} labels, {scores} scores")]
    VitalsLengthMismatch { labels: usize, scores: usize },
    #[error("failed to read fixture file: {0}")]
    FixtureRead(std::io::Error),
    #[error("failed to parse fixture file: {0}")]
    FixtureParse(serde_yaml::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
