use std::collections::{HashMap, HashSet};

use arrayvec::ArrayVec;

use super::{AugmentModule, ModuleError};
use crate::catalog::{AttackDefinition, ElementKind};
use crate::config::CombatConfig;

/// Per-character energy economy: two pools, cooldowns and installed modules.
///
/// # Invariants
///
/// - Both pools stay within `[0, max_energy]`
/// - A cooldown entry exists only while its remaining time is positive
/// - At most [`CombatConfig::MAX_MODULES`] modules, each name at most once
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceState {
    primary_energy: f32,
    secondary_energy: f32,
    /// Capacity derived from character level alone.
    level_max_energy: f32,
    base_regen_per_second: f32,
    /// Sum of installed module bonuses.
    module_energy_bonus: f32,
    module_regen_bonus: f32,
    cooldowns: HashMap<String, f32>,
    modules: ArrayVec<AugmentModule, { CombatConfig::MAX_MODULES }>,
    unlocked: HashSet<String>,
}

impl ResourceState {
    /// Creates a manager for a character of `level` with both pools full.
    pub fn new(level: u32, config: &CombatConfig) -> Self {
        let level_max_energy = config.max_energy_for_level(level).max(0.0);
        Self {
            primary_energy: level_max_energy,
            secondary_energy: level_max_energy,
            level_max_energy,
            base_regen_per_second: config.base_regen_per_second.max(0.0),
            module_energy_bonus: 0.0,
            module_regen_bonus: 0.0,
            cooldowns: HashMap::new(),
            modules: ArrayVec::new(),
            unlocked: HashSet::new(),
        }
    }

    /// Overrides the starting pool values (clamped to capacity).
    pub fn with_energy(mut self, primary: f32, secondary: f32) -> Self {
        self.primary_energy = self.clamp_pool(primary);
        self.secondary_energy = self.clamp_pool(secondary);
        self
    }

    pub fn primary_energy(&self) -> f32 {
        self.primary_energy
    }

    pub fn secondary_energy(&self) -> f32 {
        self.secondary_energy
    }

    pub fn max_energy(&self) -> f32 {
        (self.level_max_energy + self.module_energy_bonus).max(0.0)
    }

    pub fn regen_rate_per_second(&self) -> f32 {
        (self.base_regen_per_second + self.module_regen_bonus).max(0.0)
    }

    /// Installed modules in installation order.
    pub fn modules(&self) -> &[AugmentModule] {
        &self.modules
    }

    pub fn is_unlocked(&self, attack: &str) -> bool {
        self.unlocked.contains(attack)
    }

    /// Remaining cooldown for `attack`, or `None` when ready.
    pub fn cooldown_remaining(&self, attack: &str) -> Option<f32> {
        self.cooldowns.get(attack).copied()
    }

    /// Installs a module and applies its static bonuses once.
    ///
    /// Modules cannot be removed afterwards.
    pub fn install_module(&mut self, module: AugmentModule) -> Result<(), ModuleError> {
        if self.modules.is_full() {
            return Err(ModuleError::CapacityExceeded {
                capacity: CombatConfig::MAX_MODULES,
            });
        }
        if self.modules.iter().any(|m| m.name == module.name) {
            return Err(ModuleError::DuplicateModule { name: module.name });
        }

        self.module_energy_bonus += module.max_energy_bonus;
        self.module_regen_bonus += module.regen_bonus;
        self.unlocked.extend(module.unlocks.iter().cloned());
        tracing::debug!(
            module = %module.name,
            max_energy = self.max_energy(),
            regen = self.regen_rate_per_second(),
            "module installed"
        );
        self.modules.push(module);
        self.clamp_pools();
        Ok(())
    }

    /// Recomputes level-derived capacity, keeping module bonuses.
    pub fn set_level(&mut self, level: u32, config: &CombatConfig) {
        self.level_max_energy = config.max_energy_for_level(level).max(0.0);
        self.clamp_pools();
    }

    /// True if the pools cover the attack's cost.
    ///
    /// `Combined` attacks need half the cost in each pool.
    pub fn can_afford(&self, definition: &AttackDefinition) -> bool {
        let cost = definition.resource_cost;
        match definition.element {
            ElementKind::Primary => self.primary_energy >= cost,
            ElementKind::Secondary => self.secondary_energy >= cost,
            ElementKind::Combined => {
                let half = cost / 2.0;
                self.primary_energy >= half && self.secondary_energy >= half
            }
        }
    }

    /// Deducts the attack's cost using the same split as [`Self::can_afford`].
    ///
    /// Callers check affordability first; pools are clamped at 0 regardless.
    pub fn spend(&mut self, definition: &AttackDefinition) {
        let cost = definition.resource_cost;
        match definition.element {
            ElementKind::Primary => self.primary_energy = (self.primary_energy - cost).max(0.0),
            ElementKind::Secondary => {
                self.secondary_energy = (self.secondary_energy - cost).max(0.0)
            }
            ElementKind::Combined => {
                let half = cost / 2.0;
                self.primary_energy = (self.primary_energy - half).max(0.0);
                self.secondary_energy = (self.secondary_energy - half).max(0.0);
            }
        }
    }

    pub fn is_ready(&self, attack: &str) -> bool {
        self.cooldowns
            .get(attack)
            .is_none_or(|remaining| *remaining <= CombatConfig::TIME_EPSILON)
    }

    /// Sets or overwrites the remaining cooldown of `attack`.
    pub fn start_cooldown(&mut self, attack: &str, seconds: f32) {
        if seconds > CombatConfig::TIME_EPSILON {
            self.cooldowns.insert(attack.to_string(), seconds);
        } else {
            self.cooldowns.remove(attack);
        }
    }

    /// Regenerates both pools and decays every cooldown.
    ///
    /// Cooldowns that reach zero are dropped so readiness is a plain lookup.
    pub fn tick(&mut self, delta_seconds: f32) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }

        let regen = self.regen_rate_per_second() * delta_seconds;
        self.primary_energy = self.clamp_pool(self.primary_energy + regen);
        self.secondary_energy = self.clamp_pool(self.secondary_energy + regen);

        self.cooldowns.retain(|_, remaining| {
            *remaining -= delta_seconds;
            *remaining > CombatConfig::TIME_EPSILON
        });
    }

    fn clamp_pool(&self, value: f32) -> f32 {
        value.clamp(0.0, self.max_energy())
    }

    fn clamp_pools(&mut self) {
        self.primary_energy = self.clamp_pool(self.primary_energy);
        self.secondary_energy = self.clamp_pool(self.secondary_energy);
    }
}
