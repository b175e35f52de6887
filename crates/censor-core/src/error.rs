use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensorError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Recognizer model error: {0}")]
    Model(String),

    #[error("Recognizer error: {0}")]
    Recognizer(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CensorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CensorError>;
