use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("could not read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl From<SnakeError> for ggez::GameError {
    fn from(e: SnakeError) -> Self {
        ggez::GameError::CustomError(e.to_string())
    }
}
