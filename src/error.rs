// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("corpus has no pages")]
    EmptyCorpus,

    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("ranks did not converge after {sweeps} sweeps")]
    NoConvergence { sweeps: usize },

    #[error("invalid transition weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        RankError::Other(e.to_string())
    }
}
