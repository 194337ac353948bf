//! Cast errors.

use crate::error::{CombatError, ErrorSeverity};
use crate::types::CharacterId;

// ============================================================================
// Cast Errors
// ============================================================================

/// Reasons a cast produces no attack.
///
/// None of these are fatal; the caller treats them as "nothing happened".
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CastError {
    /// No catalog entry with this name.
    #[error("unknown attack '{name}'")]
    UnknownAttack { name: String },

    /// The attack's cooldown has not elapsed.
    #[error("attack '{name}' is on cooldown for {remaining:.2}s")]
    OnCooldown { name: String, remaining: f32 },

    /// The caster's pools do not cover the cost.
    #[error("not enough energy for '{name}' (cost {cost})")]
    InsufficientResources { name: String, cost: f32 },

    /// The attack needs a module unlock the caster does not have.
    #[error("attack '{name}' is locked")]
    AttackLocked { name: String },

    /// The catalog entry carries non-finite or negative numbers.
    #[error("attack '{name}' has a malformed definition")]
    MalformedAttack { name: String },

    /// Caster is not registered.
    #[error("caster {0} not found")]
    CasterNotFound(CharacterId),

    /// Caster is dead, stunned or has no energy economy.
    #[error("caster {0} cannot attack")]
    CasterIncapacitated(CharacterId),
}

impl CombatError for CastError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OnCooldown { .. }
            | Self::InsufficientResources { .. }
            | Self::CasterIncapacitated(_) => ErrorSeverity::Recoverable,
            Self::UnknownAttack { .. } | Self::AttackLocked { .. } | Self::CasterNotFound(_) => {
                ErrorSeverity::Validation
            }
            Self::MalformedAttack { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttack { .. } => "CAST_UNKNOWN_ATTACK",
            Self::OnCooldown { .. } => "CAST_ON_COOLDOWN",
            Self::InsufficientResources { .. } => "CAST_INSUFFICIENT_RESOURCES",
            Self::AttackLocked { .. } => "CAST_ATTACK_LOCKED",
            Self::MalformedAttack { .. } => "CAST_MALFORMED_ATTACK",
            Self::CasterNotFound(_) => "CAST_CASTER_NOT_FOUND",
            Self::CasterIncapacitated(_) => "CAST_CASTER_INCAPACITATED",
        }
    }
}
