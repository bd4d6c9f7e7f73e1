//! Common error infrastructure for lokarta-core.
//!
//! Domain-specific errors (`CatalogError`, `CombatError`, ...) live next to the
//! code that produces them. This module only provides the shared severity
//! classification the runtime uses to decide between failing fast and turning
//! a failure into narration.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action is refused, the player sees why, play goes on
/// - **Validation**: invalid input that should be dropped without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: broken configuration, the session cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Refused action with a user-visible explanation.
    ///
    /// Examples: no valid target, not enough MP, save failed
    Recoverable,

    /// Invalid input, ignored.
    ///
    /// Examples: stale key, target index out of range
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// Unrecoverable configuration problem.
    ///
    /// Examples: unknown predicate name, action targeting a missing venue
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error must stop the session.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all lokarta-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are SCREAMING_SNAKE identifiers, stable across releases
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
