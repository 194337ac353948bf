use crate::error::{CombatError, ErrorSeverity};

/// Errors raised while installing augmentation modules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    /// Every module slot is taken.
    #[error("all {capacity} module slots are in use")]
    CapacityExceeded { capacity: usize },

    /// A module with the same name is already installed.
    #[error("module '{name}' is already installed")]
    DuplicateModule { name: String },
}

impl CombatError for ModuleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "MODULE_CAPACITY_EXCEEDED",
            Self::DuplicateModule { .. } => "MODULE_DUPLICATE",
        }
    }
}
