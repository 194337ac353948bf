//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`CastError`, `ModuleError`) are defined next to the
//! operations they guard. Every one of them is local and recoverable from the
//! simulation's point of view: a failed cast produces no attack, a rejected
//! module leaves the bracelet unchanged, and the tick loop keeps running.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: attack on cooldown, not enough energy
    Recoverable,

    /// Invalid request; retrying without changes will fail again.
    ///
    /// Examples: unknown attack name, module slots full
    Validation,

    /// Content or state inconsistency that should be investigated.
    ///
    /// Examples: catalog entry with non-finite numbers
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates bad content or a bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all combat-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
