//! Status effect engine.
//!
//! Timed effects live on the character that carries them
//! ([`StatusEffects`]). The engine half of this module attaches effects on
//! hit and drives per-tick decay and damage/healing over time.

mod effect;
pub(crate) mod engine;

pub use effect::{Pulse, StackingRule, StatusEffect, StatusEffects, StatusKind, StatusTag};
