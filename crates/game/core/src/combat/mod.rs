//! Collision and damage resolution.
//!
//! - `damage`: the layered modifier pipeline
//! - `resolver`: per-instance collision against hostile characters
//! - `area`: splash propagation around a primary target

pub(crate) mod area;
mod damage;
pub(crate) mod resolver;

pub use damage::{DamageModifiers, calculate_damage};

use crate::catalog::ElementKind;
use crate::character::{Character, CharacterRegistry};
use crate::events::{CombatEvent, EventSink, HitSource};
use crate::types::{CharacterId, InstanceId};

/// Applies `amount` to a live character and reports the outcome.
///
/// Returns the damage actually taken; 0 if the target is gone or dead.
pub(crate) fn deal_damage<R, S>(
    registry: &mut R,
    sink: &mut S,
    target: CharacterId,
    amount: u32,
    element: ElementKind,
    source: HitSource,
    instance: Option<InstanceId>,
) -> u32
where
    R: CharacterRegistry + ?Sized,
    S: EventSink + ?Sized,
{
    let Some(character) = registry.character_mut(target) else {
        return 0;
    };
    if !character.is_alive() {
        return 0;
    }

    let taken = character.apply_damage(amount, element);
    let position = character.position();
    let defeated = !character.is_alive();

    sink.emit(CombatEvent::TargetHit {
        instance,
        target,
        amount: taken,
        element,
        position,
        source,
    });
    if defeated {
        tracing::debug!(%target, ?source, "character defeated");
        sink.emit(CombatEvent::CharacterDefeated { target });
    }
    taken
}
