use crate::types::{CharacterId, Faction};

/// Identity and allegiance of one side of a targeting check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Side {
    pub id: CharacterId,
    pub faction: Faction,
}

/// Decides which characters an attack owner may hit.
///
/// Supplied by the surrounding game mode.
pub trait Targeting {
    fn is_hostile(&self, owner: Side, candidate: Side) -> bool;
}

/// The player fights everyone; everyone else fights only the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerVersusAll;

impl Targeting for PlayerVersusAll {
    fn is_hostile(&self, owner: Side, candidate: Side) -> bool {
        owner.id != candidate.id && (owner.id.is_player() || candidate.id.is_player())
    }
}

/// Characters of different factions are hostile to each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct FactionTargeting;

impl Targeting for FactionTargeting {
    fn is_hostile(&self, owner: Side, candidate: Side) -> bool {
        owner.id != candidate.id && owner.faction != candidate.faction
    }
}

impl<F> Targeting for F
where
    F: Fn(Side, Side) -> bool,
{
    fn is_hostile(&self, owner: Side, candidate: Side) -> bool {
        self(owner, candidate)
    }
}
