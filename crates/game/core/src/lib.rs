//! Real-time combat resolution core.
//!
//! `combat-core` turns character actions into elemental attacks and resolves
//! them frame by frame. It owns the dual energy economy (pools, cooldowns,
//! augmentation modules), the live attack instances, collision and the
//! layered damage pipeline, and timed status effects with area falloff.
//!
//! Characters, targeting rules and presentation are collaborators supplied by
//! the caller through the traits in [`character`] and [`events`]. All
//! per-frame mutation flows through [`engine::CombatEngine::tick`].
pub mod attack;
pub mod catalog;
pub mod character;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod resources;
pub mod status;
pub mod types;

pub use attack::{AttackInstance, CastError, CastRequest, Instantiator};
pub use catalog::{AttackCatalog, AttackDefinition, AttackOracle, EffectSpec, EffectTag, ElementKind};
pub use character::{
    Character, CharacterRegistry, Combatant, FactionTargeting, PlayerVersusAll, Roster, Side,
    Targeting,
};
pub use combat::{DamageModifiers, calculate_damage};
pub use config::CombatConfig;
pub use engine::{CombatEngine, TickPhase};
pub use error::{CombatError, ErrorSeverity};
pub use events::{CombatEvent, EventLog, EventSink, HitSource, NullSink};
pub use resources::{AttackModifier, AugmentModule, ModuleError, ResourceState};
pub use status::{StackingRule, StatusEffect, StatusEffects, StatusKind, StatusTag};
pub use types::{CharacterId, Faction, InstanceId};

pub use glam::Vec2;
