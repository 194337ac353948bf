use std::collections::BTreeMap;

use super::{CharacterRegistry, Combatant};
use crate::types::CharacterId;

/// Ordered registry of [`Combatant`]s.
///
/// Handles are allocated sequentially and never reused, so a stale handle
/// held by a live attack can only ever resolve to `None`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    characters: BTreeMap<CharacterId, Combatant>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a combatant under the next free handle.
    ///
    /// The first spawned combatant receives [`CharacterId::PLAYER`].
    pub fn spawn(&mut self, combatant: Combatant) -> CharacterId {
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        self.characters.insert(id, combatant);
        id
    }

    pub fn remove(&mut self, id: CharacterId) -> Option<Combatant> {
        self.characters.remove(&id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Combatant> {
        self.characters.get(&id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Combatant> {
        self.characters.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &Combatant)> {
        self.characters.iter().map(|(id, c)| (*id, c))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterRegistry for Roster {
    type Character = Combatant;

    fn character(&self, id: CharacterId) -> Option<&Combatant> {
        self.get(id)
    }

    fn character_mut(&mut self, id: CharacterId) -> Option<&mut Combatant> {
        self.get_mut(id)
    }

    fn character_ids(&self) -> Vec<CharacterId> {
        self.characters.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Faction;

    #[test]
    fn handles_are_not_reused_after_removal() {
        let mut roster = Roster::new();
        let player = roster.spawn(Combatant::new("hero", Faction::Player, 100));
        let wolf = roster.spawn(Combatant::new("wolf", Faction::Wildlife, 40));
        assert_eq!(player, CharacterId::PLAYER);

        roster.remove(wolf);
        let bear = roster.spawn(Combatant::new("bear", Faction::Wildlife, 80));

        assert_ne!(wolf, bear);
        assert!(roster.character(wolf).is_none());
        assert!(!roster.is_live(wolf));
        assert_eq!(roster.character_ids(), vec![player, bear]);
    }
}
