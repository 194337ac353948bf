use std::collections::HashSet;

use glam::Vec2;

use crate::catalog::ElementKind;
use crate::config::CombatConfig;
use crate::types::{CharacterId, InstanceId};

/// A live occurrence of a catalog attack.
///
/// The owner is a handle, not a reference: the simulation checks it against
/// the registry every tick and stops resolving once it is gone.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackInstance {
    pub id: InstanceId,
    /// Catalog name of the source definition.
    pub attack: String,
    pub element: ElementKind,
    pub owner: CharacterId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Hit radius after module multipliers.
    pub range: f32,
    /// Seconds left before expiry.
    pub remaining: f32,
    /// Damage-pipeline input: catalog damage with module multipliers.
    pub base_damage: f32,
    /// Level-scaled damage used for reflect and area falloff.
    pub damage: f32,
    pub caster_level: u32,
    hit: HashSet<CharacterId>,
    expired: bool,
}

impl AttackInstance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: InstanceId,
        attack: String,
        element: ElementKind,
        owner: CharacterId,
        position: Vec2,
        velocity: Vec2,
        range: f32,
        duration: f32,
        base_damage: f32,
        caster_level: u32,
        level_factor: f32,
    ) -> Self {
        Self {
            id,
            attack,
            element,
            owner,
            position,
            velocity,
            range,
            remaining: duration,
            base_damage,
            damage: base_damage * level_factor,
            caster_level,
            hit: HashSet::new(),
            expired: false,
        }
    }

    pub fn has_hit(&self, target: CharacterId) -> bool {
        self.hit.contains(&target)
    }

    /// Number of distinct targets hit so far.
    pub fn hit_count(&self) -> usize {
        self.hit.len()
    }

    /// Marks `target` as hit; returns false if it already was.
    pub(crate) fn record_hit(&mut self, target: CharacterId) -> bool {
        self.hit.insert(target)
    }

    /// True once the duration has run out; removed at the end of the tick.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Counts down the duration and moves the instance.
    ///
    /// An instance that runs out this tick keeps its position so its final
    /// collision check happens where it last was.
    pub(crate) fn advance(&mut self, delta_seconds: f32) {
        if self.expired {
            return;
        }
        self.remaining -= delta_seconds;
        if self.remaining <= CombatConfig::TIME_EPSILON {
            self.remaining = 0.0;
            self.expired = true;
            return;
        }
        let next = self.position + self.velocity * delta_seconds;
        if next.is_finite() {
            self.position = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dart(duration: f32, velocity: Vec2) -> AttackInstance {
        AttackInstance::new(
            InstanceId(1),
            "fireDart".into(),
            ElementKind::Primary,
            CharacterId::PLAYER,
            Vec2::ZERO,
            velocity,
            1.0,
            duration,
            15.0,
            3,
            1.2,
        )
    }

    #[test]
    fn moves_until_expiry() {
        let mut instance = dart(0.3, Vec2::new(10.0, 0.0));

        instance.advance(0.1);
        instance.advance(0.1);
        assert!(!instance.is_expired());
        assert!((instance.position.x - 2.0).abs() < 1e-5);

        instance.advance(0.1);
        assert!(instance.is_expired());
        assert!((instance.position.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn hit_set_is_permanent() {
        let mut instance = dart(1.0, Vec2::ZERO);
        let goblin = CharacterId(1);

        assert!(instance.record_hit(goblin));
        assert!(!instance.record_hit(goblin));
        assert!(instance.has_hit(goblin));
        assert_eq!(instance.hit_count(), 1);
    }

    #[test]
    fn damage_scales_with_caster_level() {
        let instance = dart(1.0, Vec2::ZERO);
        assert!((instance.damage - 18.0).abs() < 1e-5);
    }
}
