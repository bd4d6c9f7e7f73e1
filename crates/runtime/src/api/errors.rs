//! Unified error types surfaced by the router.
//!
//! Only configuration problems and broken internal invariants reach callers.
//! Refused actions, stale input and failed saves are reported through
//! narration instead.

use lokarta_core::{CatalogError, ErrorSeverity, GameError, OracleError, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Debug, Error)]
pub enum RouterError {
    /// Content referenced an unknown predicate, key or record.
    #[error("invalid content: {0}")]
    Configuration(#[from] CatalogError),

    /// A record vanished between validation and dispatch.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("state invariant violated: {0}")]
    State(#[from] StateError),

    /// The selection is no longer in the legal action set. Logged and
    /// dropped by the router, never returned.
    #[error("stale selection '{key}' ({command})")]
    StaleInput { key: String, command: String },
}

impl GameError for RouterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RouterError::Configuration(err) => err.severity(),
            RouterError::Oracle(err) => err.severity(),
            RouterError::State(_) => ErrorSeverity::Internal,
            RouterError::StaleInput { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RouterError::Configuration(err) => err.error_code(),
            RouterError::Oracle(err) => err.error_code(),
            RouterError::State(err) => err.error_code(),
            RouterError::StaleInput { .. } => "ROUTER_STALE_INPUT",
        }
    }
}
