//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{QuestionError, SessionError};

/// Errors emitted while loading question configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read questions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors reported by a `ShareTarget`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareError {
    #[error("share mechanism is not available")]
    Unavailable,
    #[error("share failed: {0}")]
    Failed(String),
}
