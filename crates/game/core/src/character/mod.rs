//! Character collaborator surface.
//!
//! The combat core never owns characters. It reads and mutates them through
//! [`Character`], and finds them through a [`CharacterRegistry`] keyed by
//! [`CharacterId`] handles, so a removed owner simply stops resolving.
//!
//! [`Combatant`] and [`Roster`] are the reference implementations used by the
//! simulation binary and the tests.

mod combatant;
mod roster;
mod targeting;

pub use combatant::Combatant;
pub use roster::Roster;
pub use targeting::{FactionTargeting, PlayerVersusAll, Side, Targeting};

use glam::Vec2;

use crate::catalog::ElementKind;
use crate::resources::ResourceState;
use crate::status::{StatusEffect, StatusEffects};
use crate::types::{CharacterId, Faction};

/// Read/mutate access to one character.
pub trait Character {
    fn position(&self) -> Vec2;

    fn is_alive(&self) -> bool;

    fn level(&self) -> u32;

    fn faction(&self) -> Faction;

    /// Resistance percentage against `element` (50 halves damage).
    fn resistance(&self, element: ElementKind) -> f32;

    /// Weakness percentage against `element` (20 adds a fifth).
    fn weakness(&self, element: ElementKind) -> f32;

    /// Damage bonus percentage from equipped items.
    fn equipment_damage_bonus(&self) -> f32;

    fn status_effects(&self) -> &StatusEffects;

    fn status_effects_mut(&mut self) -> &mut StatusEffects;

    /// Energy economy, for characters that can attack.
    fn resources(&self) -> Option<&ResourceState>;

    fn resources_mut(&mut self) -> Option<&mut ResourceState>;

    /// Applies damage and returns the amount actually taken.
    fn apply_damage(&mut self, amount: u32, element: ElementKind) -> u32;

    /// Restores health and returns the amount actually healed.
    fn heal(&mut self, amount: u32) -> u32;

    /// Moves the character by `offset` (knockback).
    fn displace(&mut self, offset: Vec2);

    /// Attaches a status effect; returns true if one was replaced.
    fn apply_status_effect(&mut self, effect: StatusEffect) -> bool {
        self.status_effects_mut().apply(effect)
    }
}

/// Handle-based lookup of characters.
pub trait CharacterRegistry {
    type Character: Character;

    fn character(&self, id: CharacterId) -> Option<&Self::Character>;

    fn character_mut(&mut self, id: CharacterId) -> Option<&mut Self::Character>;

    /// Snapshot of every registered handle, in a stable order.
    fn character_ids(&self) -> Vec<CharacterId>;

    /// True if `id` is registered and alive.
    fn is_live(&self, id: CharacterId) -> bool {
        self.character(id).is_some_and(Character::is_alive)
    }
}
