//! Presentation events emitted by the combat core.
//!
//! The core never renders. It reports discrete happenings to an injected
//! [`EventSink`], and rendering, audio or UI layers consume them.

use glam::Vec2;

use crate::catalog::ElementKind;
use crate::status::StatusTag;
use crate::types::{CharacterId, InstanceId};

/// What produced a damage event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitSource {
    /// Primary collision of an attack instance.
    Direct,
    /// Area-effect splash around a primary target.
    Area,
    /// Damage bounced back to an attacker.
    Reflect,
    /// Burn ticking on its carrier.
    Periodic,
}

/// A discrete combat happening, in emission order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    AttackCreated {
        instance: InstanceId,
        owner: CharacterId,
        attack: String,
        position: Vec2,
        damage: f32,
    },
    TargetHit {
        instance: Option<InstanceId>,
        target: CharacterId,
        amount: u32,
        element: ElementKind,
        position: Vec2,
        source: HitSource,
    },
    Healed {
        target: CharacterId,
        amount: u32,
    },
    EffectApplied {
        target: CharacterId,
        effect: StatusTag,
        duration: f32,
    },
    EffectExpired {
        target: CharacterId,
        effect: StatusTag,
    },
    InstanceExpired {
        instance: InstanceId,
    },
    CharacterDefeated {
        target: CharacterId,
    },
}

/// Consumer of [`CombatEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: CombatEvent) {}
}

/// Buffers events until drained.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Removes and returns every buffered event.
    pub fn drain(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

impl<F> EventSink for F
where
    F: FnMut(CombatEvent),
{
    fn emit(&mut self, event: CombatEvent) {
        self(event)
    }
}
