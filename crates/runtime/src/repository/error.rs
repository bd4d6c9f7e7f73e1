//! Error types raised by persistence implementations.

use lokarta_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by persistence implementations.
///
/// Always recoverable: the router reports them through narration and keeps
/// the in-memory state authoritative.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Injected by test doubles.
    #[error("save rejected: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Json(err.to_string())
    }
}

impl GameError for PersistenceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::LockPoisoned => "PERSISTENCE_LOCK_POISONED",
            PersistenceError::Io(_) => "PERSISTENCE_IO",
            PersistenceError::Json(_) => "PERSISTENCE_JSON",
            PersistenceError::UnsupportedVersion { .. } => "PERSISTENCE_UNSUPPORTED_VERSION",
            PersistenceError::Rejected(_) => "PERSISTENCE_REJECTED",
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
