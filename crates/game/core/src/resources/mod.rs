//! Resource & cooldown manager ("bracelet").
//!
//! Each attacking character owns one [`ResourceState`]: two bounded energy
//! pools, a cooldown table keyed by attack name and up to three installed
//! [`AugmentModule`]s. Only the attack instantiator spends energy or starts
//! cooldowns; everything else reads.

mod error;
mod module;
mod state;

pub use error::ModuleError;
pub use module::{AttackModifier, AugmentModule};
pub use state::ResourceState;
