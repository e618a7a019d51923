use std::path::PathBuf;

use thiserror::Error;

/// Result type local to newsqa-io.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The data directory or a partition file is not where the layout expects it.
    #[error(
        "{} does not exist. Make sure the data directory contains the files from the manual download instructions:\n{instructions}",
        .path.display()
    )]
    MissingData {
        path: PathBuf,
        instructions: &'static str,
    },

    /// A structural assumption about the raw data does not hold.
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(newsqa_core::Error),
}

impl Error {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Error::MissingData {
            path: path.into(),
            instructions: newsqa_core::info::MANUAL_DOWNLOAD_INSTRUCTIONS,
        }
    }

    pub fn is_missing_data(&self) -> bool {
        matches!(self, Error::MissingData { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }
}

impl From<newsqa_core::Error> for Error {
    fn from(e: newsqa_core::Error) -> Self {
        match e {
            newsqa_core::Error::Config(msg) => Error::Config(msg),
            other => Error::Core(other),
        }
    }
}
