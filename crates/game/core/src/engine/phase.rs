//! Tick phases, in execution order.

use crate::attack::AttackInstance;
use crate::attack::simulate::{advance_all, take_expired};
use crate::catalog::AttackOracle;
use crate::character::{Character, CharacterRegistry, Targeting};
use crate::combat::resolver::Resolver;
use crate::config::CombatConfig;
use crate::events::{CombatEvent, EventSink};
use crate::status::engine::{purge_effects, tick_effects};

/// One step of a simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TickPhase {
    /// Energy regeneration and cooldown decay.
    Resources,
    /// Instance motion and duration countdown.
    Advance,
    /// Collision, damage and on-hit effects.
    Collide,
    /// Status effect decay and periodic damage/healing.
    Effects,
    /// Removal of expired instances and effects.
    Cleanup,
}

impl TickPhase {
    pub const ORDER: [TickPhase; 5] = [
        Self::Resources,
        Self::Advance,
        Self::Collide,
        Self::Effects,
        Self::Cleanup,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

pub(super) fn regenerate<R>(registry: &mut R, delta_seconds: f32)
where
    R: CharacterRegistry + ?Sized,
{
    for id in registry.character_ids() {
        let Some(character) = registry.character_mut(id) else {
            continue;
        };
        if !character.is_alive() {
            continue;
        }
        if let Some(resources) = character.resources_mut() {
            resources.tick(delta_seconds);
        }
    }
}

pub(super) fn advance(instances: &mut [AttackInstance], delta_seconds: f32) {
    advance_all(instances, delta_seconds);
}

pub(super) fn collide<C, T, R, S>(
    catalog: &C,
    targeting: &T,
    config: &CombatConfig,
    instances: &mut [AttackInstance],
    registry: &mut R,
    sink: &mut S,
) where
    C: AttackOracle + ?Sized,
    T: Targeting + ?Sized,
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    Resolver {
        catalog,
        targeting,
        config,
    }
    .resolve_all(instances, registry, sink);
}

pub(super) fn decay_effects<R, S>(registry: &mut R, sink: &mut S, delta_seconds: f32)
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    for id in registry.character_ids() {
        tick_effects(registry, sink, id, delta_seconds);
    }
}

/// Drops expired instances, instances whose owner is gone and expired
/// status effects.
pub(super) fn cleanup<R, S>(instances: &mut Vec<AttackInstance>, registry: &mut R, sink: &mut S)
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    for instance in take_expired(instances) {
        sink.emit(CombatEvent::InstanceExpired {
            instance: instance.id,
        });
    }

    instances.retain(|instance| {
        let live = registry.is_live(instance.owner);
        if !live {
            tracing::debug!(instance = %instance.id, owner = %instance.owner, "orphaned instance removed");
            sink.emit(CombatEvent::InstanceExpired {
                instance: instance.id,
            });
        }
        live
    });

    for id in registry.character_ids() {
        purge_effects(registry, sink, id);
    }
}
