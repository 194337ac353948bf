//! Final damage calculation.

use crate::catalog::ElementKind;
use crate::character::Character;
use crate::config::CombatConfig;

/// Per-hit inputs of the damage pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageModifiers {
    /// Target resistance percentage for the attack's element.
    pub resistance: f32,
    /// Target weakness percentage for the attack's element.
    pub weakness: f32,
    pub caster_level: u32,
    /// Attacker equipment damage bonus percentage.
    pub equipment_bonus: f32,
}

impl DamageModifiers {
    /// Reads the target's affinities for `element`.
    pub fn against<C: Character + ?Sized>(
        target: &C,
        element: ElementKind,
        caster_level: u32,
        equipment_bonus: f32,
    ) -> Self {
        Self {
            resistance: target.resistance(element),
            weakness: target.weakness(element),
            caster_level,
            equipment_bonus,
        }
    }
}

/// Computes the damage one hit deals.
///
/// # Formula
///
/// Applied multiplicatively, in this order:
///
/// ```text
/// damage = base
/// damage *= 1 - resistance / 100
/// damage *= 1 + weakness / 100
/// damage *= 1 + level_damage_step * (caster_level - 1)
/// damage *= 1 + equipment_bonus / 100
/// damage *= 1 - reduction / 100        (once per damage-reduction effect)
/// ```
///
/// The result is rounded to the nearest integer and never negative.
pub fn calculate_damage(
    base_damage: f32,
    modifiers: &DamageModifiers,
    reductions: impl IntoIterator<Item = f32>,
    config: &CombatConfig,
) -> u32 {
    let mut damage = base_damage;

    damage *= (1.0 - modifiers.resistance / 100.0).max(0.0);
    damage *= 1.0 + modifiers.weakness / 100.0;
    damage *= config.level_factor(modifiers.caster_level);
    damage *= 1.0 + modifiers.equipment_bonus / 100.0;
    for reduction in reductions {
        damage *= (1.0 - reduction / 100.0).max(0.0);
    }

    if !damage.is_finite() {
        tracing::warn!(base_damage, ?modifiers, "non-finite damage discarded");
        return 0;
    }
    damage.round().max(0.0) as u32
}
