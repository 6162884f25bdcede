//! Error types raised by repository implementations.

use clicker_core::{ErrorKind, GameError};
use thiserror::Error;

/// Errors surfaced by event stores and snapshot repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    /// Wraps the failure as a domain error, prefixed with `context`.
    pub fn into_game_error(self, context: &str) -> GameError {
        let kind = match self {
            RepositoryError::UnknownEventType(_) => ErrorKind::UnknownEventType,
            _ => ErrorKind::Unknown,
        };
        GameError::with_message(kind, format!("{context}: {self}")).with_source(self)
    }
}

impl From<RepositoryError> for GameError {
    fn from(error: RepositoryError) -> Self {
        error.into_game_error("repository operation failed")
    }
}
