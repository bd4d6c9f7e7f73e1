//! Combat and encounter errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::OpponentId;

/// A combat action was refused. State is untouched when one of these returns.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// No living opponent to target.
    #[error("no valid target")]
    NoTarget,

    /// The chosen target is no longer on the field.
    #[error("target {0:?} is not on the field")]
    TargetOutOfBounds(OpponentId),

    #[error("not enough MP (required: {required}, available: {available})")]
    InsufficientMp { required: u32, available: u32 },

    /// A restorative spell was cast at full HP.
    #[error("HP is already full")]
    AlreadyFull,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            NoTarget => "COMBAT_NO_TARGET",
            TargetOutOfBounds(_) => "COMBAT_TARGET_OUT_OF_BOUNDS",
            InsufficientMp { .. } => "COMBAT_INSUFFICIENT_MP",
            AlreadyFull => "COMBAT_ALREADY_FULL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    /// Every template costs more than the budget allows.
    #[error("no opponent template fits budget {budget} at level {level}")]
    NoEligibleTemplate { level: u32, budget: u32 },
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "ENCOUNTER_NO_ELIGIBLE_TEMPLATE"
    }
}
