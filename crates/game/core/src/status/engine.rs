//! On-hit effect dispatch and per-tick effect processing.

use glam::Vec2;

use super::StatusEffect;
use super::effect::Pulse;
use crate::catalog::{EffectSpec, ElementKind};
use crate::character::{Character, CharacterRegistry, Targeting};
use crate::combat::{area, deal_damage};
use crate::config::CombatConfig;
use crate::events::{CombatEvent, EventSink, HitSource};
use crate::types::{CharacterId, InstanceId};

/// The attack a batch of effects comes from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HitContext {
    pub instance: InstanceId,
    pub owner: CharacterId,
    pub element: ElementKind,
    /// Resolved attack damage (post level/module scaling).
    pub attack_damage: f32,
    /// Attack position at impact.
    pub impact: Vec2,
}

/// Applies an attack's effect list to a primary target, in list order.
pub(crate) fn apply_hit_effects<R, T, S>(
    registry: &mut R,
    targeting: &T,
    config: &CombatConfig,
    sink: &mut S,
    ctx: &HitContext,
    target: CharacterId,
    effects: &[EffectSpec],
) where
    R: CharacterRegistry + ?Sized,
    T: Targeting + ?Sized,
    S: EventSink + ?Sized,
{
    for spec in effects {
        if !spec.is_well_formed() {
            tracing::warn!(instance = %ctx.instance, effect = spec.tag().as_str(), "malformed effect skipped");
            continue;
        }
        match *spec {
            EffectSpec::Knockback { force } => knockback(registry, target, ctx.impact, force),
            EffectSpec::Reflect { percent } => reflect(
                registry,
                sink,
                ctx.owner,
                ctx.attack_damage,
                percent,
                ctx.element,
                Some(ctx.instance),
            ),
            EffectSpec::AreaEffect { radius } => {
                area::propagate(registry, targeting, config, sink, ctx, target, radius, effects)
            }
            EffectSpec::Burn { .. }
            | EffectSpec::Freeze { .. }
            | EffectSpec::Stun { .. }
            | EffectSpec::Shield { .. }
            | EffectSpec::Regeneration { .. }
            | EffectSpec::DamageReduction { .. } => {
                attach(registry, sink, target, spec, ctx.element, 1.0);
            }
        }
    }
}

/// Attaches a timed effect with its duration scaled by `duration_scale`.
///
/// Returns false if nothing was attached.
pub(crate) fn attach<R, S>(
    registry: &mut R,
    sink: &mut S,
    target: CharacterId,
    spec: &EffectSpec,
    element: ElementKind,
    duration_scale: f32,
) -> bool
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    let Some(effect) = StatusEffect::from_spec(spec, element, duration_scale) else {
        return false;
    };
    let Some(character) = registry
        .character_mut(target)
        .filter(|character| character.is_alive())
    else {
        return false;
    };

    let replaced = character.apply_status_effect(effect);
    tracing::debug!(
        %target,
        effect = effect.tag().as_str(),
        duration = effect.remaining,
        replaced,
        "status effect applied"
    );
    sink.emit(CombatEvent::EffectApplied {
        target,
        effect: effect.tag(),
        duration: effect.remaining,
    });
    true
}

/// Pushes `target` away from `from` by `force`.
///
/// A zero-length direction (target standing on the source) is a no-op.
pub(crate) fn knockback<R>(registry: &mut R, target: CharacterId, from: Vec2, force: f32)
where
    R: CharacterRegistry + ?Sized,
{
    if !force.is_finite() || force <= 0.0 {
        return;
    }
    let Some(character) = registry.character_mut(target) else {
        return;
    };
    let Some(direction) = (character.position() - from).try_normalize() else {
        tracing::trace!(%target, "knockback without direction ignored");
        return;
    };
    character.displace(direction * force);
}

/// Deals `damage * percent / 100` back to a live attacker.
///
/// Reflected damage never reflects or splashes again.
pub(crate) fn reflect<R, S>(
    registry: &mut R,
    sink: &mut S,
    owner: CharacterId,
    damage: f32,
    percent: f32,
    element: ElementKind,
    instance: Option<InstanceId>,
) where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    if !registry.is_live(owner) {
        tracing::trace!(%owner, "reflect skipped, attacker gone");
        return;
    }
    let amount = damage * percent / 100.0;
    if !amount.is_finite() || amount <= 0.0 {
        return;
    }
    deal_damage(
        registry,
        sink,
        owner,
        amount.round() as u32,
        element,
        HitSource::Reflect,
        instance,
    );
}

/// Decays one character's effects and applies burn/regeneration pulses.
///
/// Durations run down on dead characters too; only their pulses are dropped.
pub(crate) fn tick_effects<R, S>(registry: &mut R, sink: &mut S, id: CharacterId, delta_seconds: f32)
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    let pulses = match registry.character_mut(id) {
        Some(character) => {
            let pulses = character.status_effects_mut().tick(delta_seconds);
            if !character.is_alive() {
                return;
            }
            pulses
        }
        None => return,
    };

    for pulse in pulses {
        match pulse {
            Pulse::Damage { amount, element } => {
                deal_damage(registry, sink, id, amount, element, HitSource::Periodic, None);
            }
            Pulse::Heal { amount } => {
                let Some(character) = registry.character_mut(id) else {
                    continue;
                };
                let healed = character.heal(amount);
                if healed > 0 {
                    sink.emit(CombatEvent::Healed {
                        target: id,
                        amount: healed,
                    });
                }
            }
        }
    }
}

/// Removes one character's expired effects and reports them.
pub(crate) fn purge_effects<R, S>(registry: &mut R, sink: &mut S, id: CharacterId)
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    let Some(character) = registry.character_mut(id) else {
        return;
    };
    for effect in character.status_effects_mut().purge_expired() {
        sink.emit(CombatEvent::EffectExpired { target: id, effect });
    }
}
