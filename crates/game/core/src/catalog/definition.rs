use super::{EffectSpec, ElementKind};

/// Immutable catalog entry describing one attack.
///
/// Identity is `name`. Distances are world units, times are seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub name: String,
    pub element: ElementKind,
    pub base_damage: f32,
    /// Hit radius around the live instance's position.
    pub range: f32,
    /// Lifetime of a live instance.
    pub duration: f32,
    /// Energy cost; split evenly across both pools for `Combined`.
    pub resource_cost: f32,
    pub cooldown_seconds: f32,
    /// Travel speed toward the aim point; 0 keeps the instance at its origin.
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: f32,
    /// Only castable once an installed module unlocks it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_unlock: bool,
    /// Applied in order to every target this attack hits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectSpec>,
}

impl AttackDefinition {
    pub fn new(name: impl Into<String>, element: ElementKind) -> Self {
        Self {
            name: name.into(),
            element,
            base_damage: 0.0,
            range: 0.0,
            duration: 0.0,
            resource_cost: 0.0,
            cooldown_seconds: 0.0,
            speed: 0.0,
            requires_unlock: false,
            effects: Vec::new(),
        }
    }

    pub fn with_damage(mut self, base_damage: f32) -> Self {
        self.base_damage = base_damage;
        self
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_cost(mut self, resource_cost: f32) -> Self {
        self.resource_cost = resource_cost;
        self
    }

    pub fn with_cooldown(mut self, cooldown_seconds: f32) -> Self {
        self.cooldown_seconds = cooldown_seconds;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn locked(mut self) -> Self {
        self.requires_unlock = true;
        self
    }

    /// True if every numeric field and effect is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [
            self.base_damage,
            self.range,
            self.duration,
            self.resource_cost,
            self.cooldown_seconds,
            self.speed,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
            && self.effects.iter().all(EffectSpec::is_well_formed)
    }
}
