//! Equippable augmentation modules.

/// Per-attack multipliers granted by a module.
///
/// Bonuses are fractions on top of 1.0: `damage_bonus = 1.0` doubles damage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackModifier {
    /// Catalog name of the attack this modifier applies to.
    pub attack: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_bonus: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range_bonus: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_bonus: f32,
}

impl AttackModifier {
    pub fn new(attack: impl Into<String>) -> Self {
        Self {
            attack: attack.into(),
            damage_bonus: 0.0,
            range_bonus: 0.0,
            duration_bonus: 0.0,
        }
    }

    pub fn with_damage_bonus(mut self, bonus: f32) -> Self {
        self.damage_bonus = bonus;
        self
    }

    pub fn with_range_bonus(mut self, bonus: f32) -> Self {
        self.range_bonus = bonus;
        self
    }

    pub fn with_duration_bonus(mut self, bonus: f32) -> Self {
        self.duration_bonus = bonus;
        self
    }

    pub fn damage_multiplier(&self) -> f32 {
        1.0 + self.damage_bonus
    }

    pub fn range_multiplier(&self) -> f32 {
        1.0 + self.range_bonus
    }

    pub fn duration_multiplier(&self) -> f32 {
        1.0 + self.duration_bonus
    }
}

/// An augmentation installed into a [`ResourceState`](crate::ResourceState).
///
/// Static bonuses (capacity, regen, unlocks) apply once at installation.
/// Attack modifiers are consulted on every cast of the matching attack.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AugmentModule {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_energy_bonus: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub regen_bonus: f32,
    /// Catalog names this module makes castable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<AttackModifier>,
}

impl AugmentModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_max_energy_bonus(mut self, bonus: f32) -> Self {
        self.max_energy_bonus = bonus;
        self
    }

    pub fn with_regen_bonus(mut self, bonus: f32) -> Self {
        self.regen_bonus = bonus;
        self
    }

    pub fn with_unlock(mut self, attack: impl Into<String>) -> Self {
        self.unlocks.push(attack.into());
        self
    }

    pub fn with_modifier(mut self, modifier: AttackModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// First modifier targeting `attack`, if this module has one.
    pub fn modifier_for(&self, attack: &str) -> Option<&AttackModifier> {
        self.modifiers.iter().find(|m| m.attack == attack)
    }
}
