//! Frame driver for the combat core.
//!
//! The [`CombatEngine`] owns the live attack instances and is the single
//! entry point for casting and per-frame simulation. The catalog and tuning
//! config are injected by reference; characters stay with the caller's
//! registry and are reached through handles.

mod phase;

pub use phase::TickPhase;

use glam::Vec2;

use crate::attack::{AttackInstance, CastError, CastRequest, Instantiator};
use crate::catalog::AttackOracle;
use crate::character::{Character, CharacterRegistry, Targeting};
use crate::config::CombatConfig;
use crate::error::CombatError;
use crate::events::{CombatEvent, EventSink};
use crate::types::{CharacterId, InstanceId};

/// Real-time combat simulation over a character registry.
///
/// Single-threaded: one driver calls [`tick`](Self::tick) per frame and ticks
/// never overlap.
pub struct CombatEngine<'a, C: AttackOracle + ?Sized> {
    catalog: &'a C,
    config: &'a CombatConfig,
    instances: Vec<AttackInstance>,
    next_instance: u64,
}

impl<'a, C: AttackOracle + ?Sized> CombatEngine<'a, C> {
    pub fn new(catalog: &'a C, config: &'a CombatConfig) -> Self {
        Self {
            catalog,
            config,
            instances: Vec::new(),
            next_instance: 1,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        self.config
    }

    /// Live instances in creation order.
    pub fn instances(&self) -> &[AttackInstance] {
        &self.instances
    }

    pub fn instance(&self, id: InstanceId) -> Option<&AttackInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    /// Fires `attack` from `caster` toward `target`.
    ///
    /// The caster must be registered, alive, not stunned and carry a resource
    /// state. A rejected cast leaves everything unchanged.
    pub fn cast<R, S>(
        &mut self,
        registry: &mut R,
        sink: &mut S,
        caster: CharacterId,
        attack: &str,
        target: Vec2,
    ) -> Result<InstanceId, CastError>
    where
        R: CharacterRegistry + ?Sized,
        S: EventSink + ?Sized,
    {
        let character = registry
            .character_mut(caster)
            .ok_or(CastError::CasterNotFound(caster))?;
        if !character.is_alive() || character.status_effects().is_stunned() {
            return Err(CastError::CasterIncapacitated(caster));
        }

        let request = CastRequest {
            id: InstanceId(self.next_instance),
            owner: caster,
            attack,
            origin: character.position(),
            target,
            caster_level: character.level(),
        };
        let resources = character
            .resources_mut()
            .ok_or(CastError::CasterIncapacitated(caster))?;

        let instance = Instantiator::new(self.catalog, self.config)
            .instantiate(&request, resources)
            .inspect_err(|error| {
                tracing::debug!(%caster, attack, code = error.error_code(), "cast rejected: {error}");
            })?;

        self.next_instance += 1;
        let id = instance.id;
        sink.emit(CombatEvent::AttackCreated {
            instance: id,
            owner: caster,
            attack: instance.attack.clone(),
            position: instance.position,
            damage: instance.damage,
        });
        self.instances.push(instance);
        Ok(id)
    }

    /// Advances the simulation by `delta_seconds`.
    ///
    /// Phases run in a fixed order; see [`TickPhase`]. Non-positive or
    /// non-finite steps are ignored.
    pub fn tick<R, T, S>(&mut self, delta_seconds: f32, registry: &mut R, targeting: &T, sink: &mut S)
    where
        R: CharacterRegistry + ?Sized,
        T: Targeting + ?Sized,
        S: EventSink + ?Sized,
    {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            tracing::warn!(delta_seconds, "tick ignored");
            return;
        }

        for phase in TickPhase::ORDER {
            tracing::trace!(phase = phase.as_str(), delta_seconds, "tick phase");
            match phase {
                TickPhase::Resources => phase::regenerate(registry, delta_seconds),
                TickPhase::Advance => phase::advance(&mut self.instances, delta_seconds),
                TickPhase::Collide => phase::collide(
                    self.catalog,
                    targeting,
                    self.config,
                    &mut self.instances,
                    registry,
                    sink,
                ),
                TickPhase::Effects => phase::decay_effects(registry, sink, delta_seconds),
                TickPhase::Cleanup => phase::cleanup(&mut self.instances, registry, sink),
            }
        }
    }

    /// Removes one instance without any further collision processing.
    pub fn cancel(&mut self, id: InstanceId) -> bool {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.id != id);
        self.instances.len() != before
    }

    /// Removes every instance owned by `owner`; returns how many.
    pub fn cancel_owned_by(&mut self, owner: CharacterId) -> usize {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.owner != owner);
        before - self.instances.len()
    }
}
