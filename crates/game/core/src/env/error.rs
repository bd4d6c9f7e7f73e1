//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// A record referenced by id is missing from the loaded content.
///
/// Content is validated when the router starts, so hitting one of these at
/// play time means the data set and the state disagree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("scene '{0}' not found")]
    SceneNotFound(String),

    #[error("venue '{0}' not found")]
    VenueNotFound(String),

    #[error("menu '{0}' not found")]
    MenuNotFound(String),

    #[error("service '{service}' not offered by venue '{venue}'")]
    ServiceNotFound { venue: String, service: String },

    #[error("spell '{0}' not found")]
    SpellNotFound(String),

    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("no opponent templates loaded")]
    NoOpponentTemplates,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SceneNotFound(_) => "ORACLE_SCENE_NOT_FOUND",
            VenueNotFound(_) => "ORACLE_VENUE_NOT_FOUND",
            MenuNotFound(_) => "ORACLE_MENU_NOT_FOUND",
            ServiceNotFound { .. } => "ORACLE_SERVICE_NOT_FOUND",
            SpellNotFound(_) => "ORACLE_SPELL_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            NoOpponentTemplates => "ORACLE_NO_OPPONENT_TEMPLATES",
        }
    }
}
