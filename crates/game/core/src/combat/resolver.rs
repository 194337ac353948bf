//! Collision resolution for live attack instances.

use crate::attack::AttackInstance;
use crate::catalog::{AttackOracle, EffectSpec};
use crate::character::{Character, CharacterRegistry, Side, Targeting};
use crate::config::CombatConfig;
use crate::events::{EventSink, HitSource};
use crate::status::engine::{HitContext, apply_hit_effects, reflect};

use super::{DamageModifiers, calculate_damage, deal_damage};

/// Shared collaborators of one resolution pass.
pub(crate) struct Resolver<'a, C: ?Sized, T: ?Sized> {
    pub catalog: &'a C,
    pub targeting: &'a T,
    pub config: &'a CombatConfig,
}

impl<C, T> Resolver<'_, C, T>
where
    C: AttackOracle + ?Sized,
    T: Targeting + ?Sized,
{
    /// Resolves every instance against the registry, in instance order.
    pub fn resolve_all<R, S>(&self, instances: &mut [AttackInstance], registry: &mut R, sink: &mut S)
    where
        R: CharacterRegistry + ?Sized,
        S: EventSink + ?Sized,
    {
        for instance in instances.iter_mut() {
            self.resolve(instance, registry, sink);
        }
    }

    /// Hits every hostile character within range that this instance has not
    /// hit before.
    pub fn resolve<R, S>(&self, instance: &mut AttackInstance, registry: &mut R, sink: &mut S)
    where
        R: CharacterRegistry + ?Sized,
        S: EventSink + ?Sized,
    {
        if !instance.range.is_finite() || instance.range <= 0.0 {
            return;
        }
        let Some(owner) = registry
            .character(instance.owner)
            .filter(|owner| owner.is_alive())
        else {
            return;
        };
        let owner_side = Side {
            id: instance.owner,
            faction: owner.faction(),
        };

        let effects: &[EffectSpec] = match self.catalog.attack(&instance.attack) {
            Some(definition) => &definition.effects,
            None => {
                tracing::warn!(instance = %instance.id, attack = %instance.attack, "attack missing from catalog, effects skipped");
                &[]
            }
        };

        for id in registry.character_ids() {
            if id == instance.owner || instance.has_hit(id) {
                continue;
            }
            let Some(candidate) = registry.character(id) else {
                continue;
            };
            let side = Side {
                id,
                faction: candidate.faction(),
            };
            if !candidate.is_alive()
                || !self.targeting.is_hostile(owner_side, side)
                || candidate.position().distance(instance.position) > instance.range
            {
                continue;
            }

            let equipment_bonus = registry
                .character(instance.owner)
                .map_or(0.0, Character::equipment_damage_bonus);
            let modifiers =
                DamageModifiers::against(candidate, instance.element, instance.caster_level, equipment_bonus);
            let amount = calculate_damage(
                instance.base_damage,
                &modifiers,
                candidate.status_effects().damage_reductions(),
                self.config,
            );
            let reflect_percent = candidate.status_effects().reflect_percent();

            instance.record_hit(id);
            tracing::debug!(instance = %instance.id, target = %id, amount, "attack hit");
            deal_damage(
                registry,
                sink,
                id,
                amount,
                instance.element,
                HitSource::Direct,
                Some(instance.id),
            );

            if let Some(percent) = reflect_percent {
                reflect(
                    registry,
                    sink,
                    instance.owner,
                    amount as f32,
                    percent,
                    instance.element,
                    Some(instance.id),
                );
            }

            let ctx = HitContext {
                instance: instance.id,
                owner: instance.owner,
                element: instance.element,
                attack_damage: instance.damage,
                impact: instance.position,
            };
            apply_hit_effects(registry, self.targeting, self.config, sink, &ctx, id, effects);

            if !registry.is_live(instance.owner) {
                tracing::debug!(instance = %instance.id, "owner fell mid-resolution");
                break;
            }
        }
    }
}
