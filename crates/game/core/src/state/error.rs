//! State management errors.
//!
//! Errors related to roster capacity, mode transitions and player resources.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Opponent roster is full (max capacity reached).
    #[error("opponent roster is full (max: {max})")]
    RosterFull {
        /// Maximum capacity.
        max: usize,
    },

    /// A prompt is already pending; prompts never nest.
    #[error("a prompt is already pending")]
    PromptAlreadyOpen,

    /// Combat requires at least one opponent on the field.
    #[error("cannot enter combat without opponents")]
    NoOpponents,

    /// No unspent stat points remain.
    #[error("no stat points to allocate")]
    NoStatPoints,

    /// Not enough gold for a purchase or service.
    #[error("not enough gold (required: {required}, available: {available})")]
    InsufficientGold { required: u32, available: u32 },

    /// The player does not hold the item.
    #[error("item '{0}' is not in the inventory")]
    ItemNotHeld(String),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            RosterFull { .. } | PromptAlreadyOpen | NoOpponents => ErrorSeverity::Internal,
            NoStatPoints | InsufficientGold { .. } | ItemNotHeld(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            RosterFull { .. } => "STATE_ROSTER_FULL",
            PromptAlreadyOpen => "STATE_PROMPT_ALREADY_OPEN",
            NoOpponents => "STATE_NO_OPPONENTS",
            NoStatPoints => "STATE_NO_STAT_POINTS",
            InsufficientGold { .. } => "STATE_INSUFFICIENT_GOLD",
            ItemNotHeld(_) => "STATE_ITEM_NOT_HELD",
        }
    }
}
