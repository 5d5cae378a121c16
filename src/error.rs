use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Everything that can go wrong while building a corpus or ranking it
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Corpus not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("PageRank did not converge after {iterations} iterations (last change {delta})")]
    Convergence { iterations: usize, delta: f64 },
}
