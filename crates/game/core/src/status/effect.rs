//! Status effect types attached to characters.

use crate::catalog::{EffectSpec, ElementKind};
use crate::config::CombatConfig;

/// Kind of a timed status effect with its kind-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Damage over time.
    Burn { damage_per_second: f32 },
    /// Movement slow.
    Freeze { slow_percent: f32 },
    /// Cannot cast.
    Stun,
    /// Absorbs incoming damage until `remaining` is spent.
    Shield { remaining: f32 },
    /// Healing over time.
    Regeneration { heal_per_second: f32 },
    /// Incoming hit damage multiplied by `1 - percent/100`.
    DamageReduction { percent: f32 },
    /// Returns `percent` of hit damage taken to the attacker.
    Reflect { percent: f32 },
}

/// Fieldless discriminant of [`StatusKind`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatusTag {
    Burn,
    Freeze,
    Stun,
    Shield,
    Regeneration,
    DamageReduction,
    Reflect,
}

/// How a new effect interacts with an existing one of the same tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackingRule {
    /// Last applied wins.
    Replace,
    /// Effects coexist.
    Stack,
}

impl StatusTag {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn stacking(self) -> StackingRule {
        match self {
            Self::DamageReduction => StackingRule::Stack,
            Self::Burn
            | Self::Freeze
            | Self::Stun
            | Self::Shield
            | Self::Regeneration
            | Self::Reflect => StackingRule::Replace,
        }
    }
}

impl StatusKind {
    pub fn tag(&self) -> StatusTag {
        match self {
            Self::Burn { .. } => StatusTag::Burn,
            Self::Freeze { .. } => StatusTag::Freeze,
            Self::Stun => StatusTag::Stun,
            Self::Shield { .. } => StatusTag::Shield,
            Self::Regeneration { .. } => StatusTag::Regeneration,
            Self::DamageReduction { .. } => StatusTag::DamageReduction,
            Self::Reflect { .. } => StatusTag::Reflect,
        }
    }
}

/// A timed effect owned by a character.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Seconds left before expiry.
    pub remaining: f32,
    /// Element of the attack that applied it; used for periodic damage.
    pub element: ElementKind,
    /// Time accumulated toward the next periodic application.
    pulse_timer: f32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, duration: f32, element: ElementKind) -> Self {
        Self {
            kind,
            remaining: duration,
            element,
            pulse_timer: 0.0,
        }
    }

    /// Converts a timed effect spec into a status effect.
    ///
    /// Returns `None` for instant specs and for scaled durations that are not
    /// positive.
    pub fn from_spec(spec: &EffectSpec, element: ElementKind, duration_scale: f32) -> Option<Self> {
        let kind = match *spec {
            EffectSpec::Burn {
                damage_per_second, ..
            } => StatusKind::Burn { damage_per_second },
            EffectSpec::Freeze { slow_percent, .. } => StatusKind::Freeze { slow_percent },
            EffectSpec::Stun { .. } => StatusKind::Stun,
            EffectSpec::Shield { amount, .. } => StatusKind::Shield { remaining: amount },
            EffectSpec::Regeneration {
                heal_per_second, ..
            } => StatusKind::Regeneration { heal_per_second },
            EffectSpec::DamageReduction { percent, .. } => StatusKind::DamageReduction { percent },
            EffectSpec::Knockback { .. } | EffectSpec::Reflect { .. } | EffectSpec::AreaEffect { .. } => {
                return None;
            }
        };
        let duration = spec.duration()? * duration_scale;
        if !duration.is_finite() || duration <= CombatConfig::TIME_EPSILON {
            return None;
        }
        Some(Self::new(kind, duration, element))
    }

    pub fn tag(&self) -> StatusTag {
        self.kind.tag()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= CombatConfig::TIME_EPSILON
    }
}

/// Periodic outcome produced by [`StatusEffects::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pulse {
    Damage { amount: u32, element: ElementKind },
    Heal { amount: u32 },
}

/// Live status effects on one character.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an effect following its tag's stacking rule.
    ///
    /// Returns true if an existing effect of the same tag was replaced.
    pub fn apply(&mut self, effect: StatusEffect) -> bool {
        let tag = effect.tag();
        if tag.stacking() == StackingRule::Replace {
            if let Some(existing) = self.effects.iter_mut().find(|e| e.tag() == tag) {
                *existing = effect;
                return true;
            }
        }
        self.effects.push(effect);
        false
    }

    pub fn has(&self, tag: StatusTag) -> bool {
        self.active().any(|e| e.tag() == tag)
    }

    pub fn get(&self, tag: StatusTag) -> Option<&StatusEffect> {
        self.active().find(|e| e.tag() == tag)
    }

    pub fn count(&self, tag: StatusTag) -> usize {
        self.active().filter(|e| e.tag() == tag).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn is_stunned(&self) -> bool {
        self.has(StatusTag::Stun)
    }

    /// Speed multiplier from an active freeze, in `[0, 1]`.
    pub fn movement_multiplier(&self) -> f32 {
        self.active()
            .find_map(|e| match e.kind {
                StatusKind::Freeze { slow_percent } => {
                    Some((1.0 - slow_percent / 100.0).clamp(0.0, 1.0))
                }
                _ => None,
            })
            .unwrap_or(1.0)
    }

    /// Percentages of every active damage-reduction effect.
    pub fn damage_reductions(&self) -> impl Iterator<Item = f32> + '_ {
        self.active().filter_map(|e| match e.kind {
            StatusKind::DamageReduction { percent } => Some(percent),
            _ => None,
        })
    }

    pub fn reflect_percent(&self) -> Option<f32> {
        self.active().find_map(|e| match e.kind {
            StatusKind::Reflect { percent } => Some(percent),
            _ => None,
        })
    }

    pub fn shield_remaining(&self) -> f32 {
        self.active()
            .find_map(|e| match e.kind {
                StatusKind::Shield { remaining } => Some(remaining),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    /// Soaks `amount` into an active shield and returns what gets through.
    ///
    /// A depleted shield is expired in place and removed on the next purge.
    pub fn absorb(&mut self, amount: u32) -> u32 {
        let Some(shield) = self
            .effects
            .iter_mut()
            .find(|e| !e.is_expired() && e.tag() == StatusTag::Shield)
        else {
            return amount;
        };
        let StatusKind::Shield { remaining } = &mut shield.kind else {
            return amount;
        };

        let soaked = remaining.min(amount as f32).max(0.0);
        *remaining -= soaked;
        if *remaining <= 0.0 {
            shield.remaining = 0.0;
        }
        (amount as f32 - soaked).round().max(0.0) as u32
    }

    /// Advances every effect by `delta_seconds`.
    ///
    /// Burn and regeneration fire once whenever their accumulator reaches a
    /// full second; the remainder is dropped.
    pub fn tick(&mut self, delta_seconds: f32) -> Vec<Pulse> {
        let mut pulses = Vec::new();
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return pulses;
        }

        for effect in &mut self.effects {
            if effect.is_expired() {
                continue;
            }
            effect.remaining -= delta_seconds;
            effect.pulse_timer += delta_seconds;
            if effect.pulse_timer < 1.0 - CombatConfig::TIME_EPSILON {
                continue;
            }
            effect.pulse_timer = 0.0;

            let pulse = match effect.kind {
                StatusKind::Burn { damage_per_second } => Pulse::Damage {
                    amount: per_pulse(damage_per_second),
                    element: effect.element,
                },
                StatusKind::Regeneration { heal_per_second } => Pulse::Heal {
                    amount: per_pulse(heal_per_second),
                },
                _ => continue,
            };
            if !matches!(pulse, Pulse::Damage { amount: 0, .. } | Pulse::Heal { amount: 0 }) {
                pulses.push(pulse);
            }
        }
        pulses
    }

    /// Removes expired effects, returning their tags in list order.
    pub fn purge_expired(&mut self) -> Vec<StatusTag> {
        let mut expired = Vec::new();
        self.effects.retain(|e| {
            if e.is_expired() {
                expired.push(e.tag());
                false
            } else {
                true
            }
        });
        expired
    }

    fn active(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|e| !e.is_expired())
    }
}

fn per_pulse(rate: f32) -> u32 {
    if rate.is_finite() {
        rate.round().max(0.0) as u32
    } else {
        0
    }
}
