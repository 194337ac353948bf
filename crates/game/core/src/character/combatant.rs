use std::collections::HashMap;

use glam::Vec2;

use super::Character;
use crate::catalog::ElementKind;
use crate::resources::ResourceState;
use crate::status::StatusEffects;
use crate::types::Faction;

/// Reference character: health, affinities, equipment bonus and statuses.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub position: Vec2,
    pub faction: Faction,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub resistances: HashMap<ElementKind, f32>,
    pub weaknesses: HashMap<ElementKind, f32>,
    pub equipment_bonus: f32,
    pub resources: Option<ResourceState>,
    pub status_effects: StatusEffects,
}

impl Combatant {
    pub fn new(name: impl Into<String>, faction: Faction, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            position: Vec2::ZERO,
            faction,
            level: 1,
            hp: max_hp,
            max_hp,
            resistances: HashMap::new(),
            weaknesses: HashMap::new(),
            equipment_bonus: 0.0,
            resources: None,
            status_effects: StatusEffects::new(),
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_resistance(mut self, element: ElementKind, percent: f32) -> Self {
        self.resistances.insert(element, percent);
        self
    }

    pub fn with_weakness(mut self, element: ElementKind, percent: f32) -> Self {
        self.weaknesses.insert(element, percent);
        self
    }

    pub fn with_equipment_bonus(mut self, percent: f32) -> Self {
        self.equipment_bonus = percent;
        self
    }

    pub fn with_resources(mut self, resources: ResourceState) -> Self {
        self.resources = Some(resources);
        self
    }
}

impl Character for Combatant {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_alive(&self) -> bool {
        self.hp > 0
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn faction(&self) -> Faction {
        self.faction
    }

    fn resistance(&self, element: ElementKind) -> f32 {
        self.resistances.get(&element).copied().unwrap_or(0.0)
    }

    fn weakness(&self, element: ElementKind) -> f32 {
        self.weaknesses.get(&element).copied().unwrap_or(0.0)
    }

    fn equipment_damage_bonus(&self) -> f32 {
        self.equipment_bonus
    }

    fn status_effects(&self) -> &StatusEffects {
        &self.status_effects
    }

    fn status_effects_mut(&mut self) -> &mut StatusEffects {
        &mut self.status_effects
    }

    fn resources(&self) -> Option<&ResourceState> {
        self.resources.as_ref()
    }

    fn resources_mut(&mut self) -> Option<&mut ResourceState> {
        self.resources.as_mut()
    }

    fn apply_damage(&mut self, amount: u32, _element: ElementKind) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let through = self.status_effects.absorb(amount);
        let taken = through.min(self.hp);
        self.hp -= taken;
        taken
    }

    fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let healed = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += healed;
        healed
    }

    fn displace(&mut self, offset: Vec2) {
        if offset.is_finite() {
            self.position += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{StatusEffect, StatusKind};

    #[test]
    fn damage_clamps_at_zero_and_kills() {
        let mut dummy = Combatant::new("dummy", Faction::Enemy, 10);
        assert_eq!(dummy.apply_damage(25, ElementKind::Primary), 10);
        assert!(!dummy.is_alive());
        assert_eq!(dummy.apply_damage(5, ElementKind::Primary), 0);
        assert_eq!(dummy.heal(5), 0, "dead characters are not healed");
    }

    #[test]
    fn shield_soaks_before_health() {
        let mut knight = Combatant::new("knight", Faction::Player, 50);
        knight.apply_status_effect(StatusEffect::new(
            StatusKind::Shield { remaining: 8.0 },
            3.0,
            ElementKind::Secondary,
        ));

        assert_eq!(knight.apply_damage(12, ElementKind::Primary), 4);
        assert_eq!(knight.hp, 46);
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut scout = Combatant::new("scout", Faction::Player, 30);
        scout.hp = 25;
        assert_eq!(scout.heal(10), 5);
        assert_eq!(scout.hp, 30);
    }
}
