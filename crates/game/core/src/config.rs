/// Combat tuning constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage gained per caster level, as a fraction of the base (0.1 = +10%).
    pub level_damage_step: f32,
    /// Global multiplier applied to damage dealt to area-effect secondary targets.
    pub area_damage_factor: f32,
    /// Energy capacity of each pool at level 0, before module bonuses.
    pub base_max_energy: f32,
    /// Energy capacity added per character level.
    pub max_energy_per_level: f32,
    /// Energy regenerated per second in each pool, before module bonuses.
    pub base_regen_per_second: f32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of augmentation module slots on a resource manager.
    pub const MAX_MODULES: usize = 3;

    /// Tolerance for float time comparisons (cooldowns, effect durations).
    pub const TIME_EPSILON: f32 = 1e-4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_DAMAGE_STEP: f32 = 0.1;
    pub const DEFAULT_AREA_DAMAGE_FACTOR: f32 = 0.5;
    pub const DEFAULT_BASE_MAX_ENERGY: f32 = 100.0;
    pub const DEFAULT_MAX_ENERGY_PER_LEVEL: f32 = 10.0;
    pub const DEFAULT_BASE_REGEN_PER_SECOND: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            level_damage_step: Self::DEFAULT_LEVEL_DAMAGE_STEP,
            area_damage_factor: Self::DEFAULT_AREA_DAMAGE_FACTOR,
            base_max_energy: Self::DEFAULT_BASE_MAX_ENERGY,
            max_energy_per_level: Self::DEFAULT_MAX_ENERGY_PER_LEVEL,
            base_regen_per_second: Self::DEFAULT_BASE_REGEN_PER_SECOND,
        }
    }

    /// Damage multiplier for a caster level; level 1 (and 0) is the baseline.
    pub fn level_factor(&self, caster_level: u32) -> f32 {
        1.0 + self.level_damage_step * caster_level.saturating_sub(1) as f32
    }

    /// Energy capacity for a character of the given level, before module bonuses.
    pub fn max_energy_for_level(&self, level: u32) -> f32 {
        self.base_max_energy + self.max_energy_per_level * level as f32
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
