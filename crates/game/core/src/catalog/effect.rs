//! On-hit effect specifications carried by catalog entries.

/// One effect an attack applies to whatever it hits.
///
/// Timed kinds become a [`StatusEffect`](crate::StatusEffect) on the target;
/// `Knockback`, `Reflect` and `AreaEffect` resolve immediately.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSpec {
    /// Damage over time, applied once per elapsed second.
    Burn { duration: f32, damage_per_second: f32 },
    /// Movement slow by `slow_percent`.
    Freeze { duration: f32, slow_percent: f32 },
    /// Target cannot cast while stunned.
    Stun { duration: f32 },
    /// Push the target away from the impact point.
    Knockback { force: f32 },
    /// Deal `percent` of the attack damage back to the attacker.
    Reflect { percent: f32 },
    /// Absorb up to `amount` incoming damage.
    Shield { duration: f32, amount: f32 },
    /// Healing over time, applied once per elapsed second.
    Regeneration { duration: f32, heal_per_second: f32 },
    /// Reduce incoming hit damage by `percent`.
    DamageReduction { duration: f32, percent: f32 },
    /// Splash damage and effects around the primary target.
    AreaEffect { radius: f32 },
}

/// Fieldless discriminant of [`EffectSpec`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EffectTag {
    Burn,
    Freeze,
    Stun,
    Knockback,
    Reflect,
    Shield,
    Regeneration,
    DamageReduction,
    AreaEffect,
}

impl EffectSpec {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Burn { .. } => EffectTag::Burn,
            Self::Freeze { .. } => EffectTag::Freeze,
            Self::Stun { .. } => EffectTag::Stun,
            Self::Knockback { .. } => EffectTag::Knockback,
            Self::Reflect { .. } => EffectTag::Reflect,
            Self::Shield { .. } => EffectTag::Shield,
            Self::Regeneration { .. } => EffectTag::Regeneration,
            Self::DamageReduction { .. } => EffectTag::DamageReduction,
            Self::AreaEffect { .. } => EffectTag::AreaEffect,
        }
    }

    /// Duration of timed effects; `None` for instant ones.
    pub fn duration(&self) -> Option<f32> {
        match *self {
            Self::Burn { duration, .. }
            | Self::Freeze { duration, .. }
            | Self::Stun { duration }
            | Self::Shield { duration, .. }
            | Self::Regeneration { duration, .. }
            | Self::DamageReduction { duration, .. } => Some(duration),
            Self::Knockback { .. } | Self::Reflect { .. } | Self::AreaEffect { .. } => None,
        }
    }

    /// True if every parameter is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        let (first, second) = match *self {
            Self::Burn {
                duration,
                damage_per_second,
            } => (duration, damage_per_second),
            Self::Freeze {
                duration,
                slow_percent,
            } => (duration, slow_percent),
            Self::Stun { duration } => (duration, 0.0),
            Self::Knockback { force } => (force, 0.0),
            Self::Reflect { percent } => (percent, 0.0),
            Self::Shield { duration, amount } => (duration, amount),
            Self::Regeneration {
                duration,
                heal_per_second,
            } => (duration, heal_per_second),
            Self::DamageReduction { duration, percent } => (duration, percent),
            Self::AreaEffect { radius } => (radius, 0.0),
        };
        [first, second].iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl EffectTag {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
