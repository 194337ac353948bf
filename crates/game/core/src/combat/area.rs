//! Area-effect propagation.
//!
//! Damage and effects fall off linearly from the primary target's position
//! and reach zero at the radius.

use crate::catalog::EffectSpec;
use crate::character::{Character, CharacterRegistry, Side, Targeting};
use crate::config::CombatConfig;
use crate::events::{EventSink, HitSource};
use crate::status::engine::{HitContext, attach, knockback};
use crate::types::CharacterId;

use super::deal_damage;

/// Linear falloff at `distance`; `None` at or beyond the radius.
pub(crate) fn falloff(distance: f32, radius: f32) -> Option<f32> {
    if !radius.is_finite() || radius <= 0.0 || !distance.is_finite() || distance >= radius {
        return None;
    }
    Some(1.0 - distance / radius)
}

/// Splashes an attack onto everything hostile around `primary`.
///
/// Secondary targets are not recorded in the instance hit set.
#[allow(clippy::too_many_arguments)]
pub(crate) fn propagate<R, T, S>(
    registry: &mut R,
    targeting: &T,
    config: &CombatConfig,
    sink: &mut S,
    ctx: &HitContext,
    primary: CharacterId,
    radius: f32,
    effects: &[EffectSpec],
) where
    R: CharacterRegistry + ?Sized,
    T: Targeting + ?Sized,
    S: EventSink + ?Sized,
{
    let Some(center) = registry.character(primary).map(Character::position) else {
        return;
    };
    let Some(owner) = registry.character(ctx.owner).map(|owner| Side {
        id: ctx.owner,
        faction: owner.faction(),
    }) else {
        return;
    };

    let targets: Vec<(CharacterId, f32)> = registry
        .character_ids()
        .into_iter()
        .filter(|&id| id != primary && id != ctx.owner)
        .filter_map(|id| {
            let candidate = registry.character(id)?;
            if !candidate.is_alive() {
                return None;
            }
            let side = Side {
                id,
                faction: candidate.faction(),
            };
            if !targeting.is_hostile(owner, side) {
                return None;
            }
            let scale = falloff(candidate.position().distance(center), radius)?;
            Some((id, scale))
        })
        .collect();

    tracing::trace!(instance = %ctx.instance, %primary, radius, hits = targets.len(), "area propagation");

    for (target, scale) in targets {
        let amount = (ctx.attack_damage * scale * config.area_damage_factor).round();
        if amount.is_finite() && amount > 0.0 {
            deal_damage(
                registry,
                sink,
                target,
                amount as u32,
                ctx.element,
                HitSource::Area,
                Some(ctx.instance),
            );
        }

        for spec in effects {
            if !spec.is_well_formed() {
                continue;
            }
            match *spec {
                EffectSpec::AreaEffect { .. } | EffectSpec::Reflect { .. } => {}
                EffectSpec::Knockback { force } => knockback(registry, target, center, force * scale),
                _ => {
                    attach(registry, sink, target, spec, ctx.element, scale);
                }
            }
        }
    }
}
