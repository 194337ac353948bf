//! Attack instantiation.
//!
//! The only path that spends energy or starts cooldowns.

use glam::Vec2;

use super::{AttackInstance, CastError};
use crate::catalog::AttackOracle;
use crate::config::CombatConfig;
use crate::resources::ResourceState;
use crate::types::{CharacterId, InstanceId};

/// One cast attempt.
#[derive(Clone, Copy, Debug)]
pub struct CastRequest<'a> {
    /// Identity given to the instance on success.
    pub id: InstanceId,
    pub owner: CharacterId,
    pub attack: &'a str,
    pub origin: Vec2,
    /// Aim point; the instance travels toward it at the attack's speed.
    pub target: Vec2,
    pub caster_level: u32,
}

/// Turns catalog entries into live instances.
pub struct Instantiator<'a, C: AttackOracle + ?Sized> {
    catalog: &'a C,
    config: &'a CombatConfig,
}

impl<'a, C: AttackOracle + ?Sized> Instantiator<'a, C> {
    pub fn new(catalog: &'a C, config: &'a CombatConfig) -> Self {
        Self { catalog, config }
    }

    /// Validates the cast, pays for it and builds the instance.
    ///
    /// On any error the resource state is left untouched.
    pub fn instantiate(
        &self,
        request: &CastRequest<'_>,
        resources: &mut ResourceState,
    ) -> Result<AttackInstance, CastError> {
        let name = request.attack;
        let definition = self
            .catalog
            .attack(name)
            .ok_or_else(|| CastError::UnknownAttack { name: name.into() })?;

        if !definition.is_well_formed() {
            tracing::warn!(attack = name, "malformed attack definition");
            return Err(CastError::MalformedAttack { name: name.into() });
        }
        if definition.requires_unlock && !resources.is_unlocked(name) {
            return Err(CastError::AttackLocked { name: name.into() });
        }
        if !resources.is_ready(name) {
            return Err(CastError::OnCooldown {
                name: name.into(),
                remaining: resources.cooldown_remaining(name).unwrap_or(0.0),
            });
        }
        if !resources.can_afford(definition) {
            return Err(CastError::InsufficientResources {
                name: name.into(),
                cost: definition.resource_cost,
            });
        }

        // Installation order; each module applies once.
        let (damage_mul, range_mul, duration_mul) = resources
            .modules()
            .iter()
            .filter_map(|module| module.modifier_for(name))
            .fold((1.0_f32, 1.0_f32, 1.0_f32), |(d, r, t), m| {
                (
                    d * m.damage_multiplier(),
                    r * m.range_multiplier(),
                    t * m.duration_multiplier(),
                )
            });

        resources.spend(definition);
        resources.start_cooldown(name, definition.cooldown_seconds);

        let velocity = (request.target - request.origin)
            .try_normalize()
            .map_or(Vec2::ZERO, |direction| direction * definition.speed);

        let instance = AttackInstance::new(
            request.id,
            definition.name.clone(),
            definition.element,
            request.owner,
            request.origin,
            velocity,
            (definition.range * range_mul).max(0.0),
            (definition.duration * duration_mul).max(0.0),
            (definition.base_damage * damage_mul).max(0.0),
            request.caster_level,
            self.config.level_factor(request.caster_level),
        );
        tracing::debug!(
            instance = %instance.id,
            owner = %instance.owner,
            attack = name,
            damage = instance.damage,
            range = instance.range,
            "attack instantiated"
        );
        Ok(instance)
    }
}
