//! Event logging and skirmish tallies.

use combat_core::{CharacterId, CombatEvent, EventSink};

/// How a skirmish ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    Timeout,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Timeout => "timeout",
        }
    }
}

/// Totals gathered over one skirmish.
#[derive(Clone, Debug)]
pub struct Summary {
    pub ticks: u32,
    pub casts: u32,
    /// Damage dealt to non-player characters.
    pub damage_dealt: u64,
    /// Damage taken by the player.
    pub damage_taken: u64,
    pub defeated: u32,
    pub outcome: Outcome,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            ticks: 0,
            casts: 0,
            damage_dealt: 0,
            damage_taken: 0,
            defeated: 0,
            outcome: Outcome::Timeout,
        }
    }
}

/// Event sink that logs every event and keeps running totals.
#[derive(Debug, Default)]
pub struct Report {
    pub summary: Summary,
}

impl EventSink for Report {
    fn emit(&mut self, event: CombatEvent) {
        match &event {
            CombatEvent::AttackCreated {
                instance,
                owner,
                attack,
                damage,
                ..
            } => {
                self.summary.casts += 1;
                tracing::info!(%instance, %owner, attack = attack.as_str(), damage, "attack created");
            }
            CombatEvent::TargetHit {
                target,
                amount,
                element,
                source,
                ..
            } => {
                if *target == CharacterId::PLAYER {
                    self.summary.damage_taken += u64::from(*amount);
                } else {
                    self.summary.damage_dealt += u64::from(*amount);
                }
                let source: &'static str = (*source).into();
                tracing::info!(%target, amount, element = element.as_str(), source, "hit");
            }
            CombatEvent::Healed { target, amount } => {
                tracing::info!(%target, amount, "healed");
            }
            CombatEvent::EffectApplied {
                target,
                effect,
                duration,
            } => {
                tracing::info!(%target, effect = effect.as_str(), duration, "effect applied");
            }
            CombatEvent::EffectExpired { target, effect } => {
                tracing::debug!(%target, effect = effect.as_str(), "effect expired");
            }
            CombatEvent::InstanceExpired { instance } => {
                tracing::debug!(%instance, "instance expired");
            }
            CombatEvent::CharacterDefeated { target } => {
                self.summary.defeated += 1;
                tracing::info!(%target, "defeated");
            }
        }
    }
}
