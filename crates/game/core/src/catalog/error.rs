//! Configuration errors found while validating or filtering action records.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

use super::{ActionType, CommandId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown predicate '{0}'")]
    UnknownPredicate(String),

    #[error("action '{key}' ({command}) has an empty or malformed key")]
    InvalidKey { key: String, command: CommandId },

    #[error("action '{key}' ({command}) declares type {declared}, expected {expected}")]
    TypeMismatch {
        key: String,
        command: CommandId,
        declared: ActionType,
        expected: ActionType,
    },

    #[error("action '{key}' ({command}) needs a target")]
    MissingTarget { key: String, command: CommandId },

    #[error("action '{key}' ({command}) targets unknown '{target}'")]
    UnknownTarget {
        key: String,
        command: CommandId,
        target: String,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            UnknownPredicate(_) => "CATALOG_UNKNOWN_PREDICATE",
            InvalidKey { .. } => "CATALOG_INVALID_KEY",
            TypeMismatch { .. } => "CATALOG_TYPE_MISMATCH",
            MissingTarget { .. } => "CATALOG_MISSING_TARGET",
            UnknownTarget { .. } => "CATALOG_UNKNOWN_TARGET",
            Oracle(err) => err.error_code(),
        }
    }
}
