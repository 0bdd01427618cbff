//! Battle state: the two rosters and unit bookkeeping
//!
//! Roster order is significant: units tick in insertion order (party before
//! enemies) and index-based targeting reads the same order.

use serde::{Deserialize, Serialize};

use crate::battle::units::Unit;
use crate::core::types::{Side, Tick, UnitId};

/// How a finished battle ended, from the party's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleState {
    pub(crate) party: Vec<Unit>,
    pub(crate) enemies: Vec<Unit>,
    pub current_tick: Tick,
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_party_member(&mut self, mut unit: Unit) -> UnitId {
        unit.side = Side::Party;
        let id = unit.id;
        self.party.push(unit);
        id
    }

    pub fn add_enemy(&mut self, mut unit: Unit) -> UnitId {
        unit.side = Side::Enemy;
        let id = unit.id;
        self.enemies.push(unit);
        id
    }

    pub fn party(&self) -> &[Unit] {
        &self.party
    }

    pub fn enemies(&self) -> &[Unit] {
        &self.enemies
    }

    /// Mutable access for the embedding game (rule edits, mana grants);
    /// membership itself only changes through add_* and defeat removal
    pub fn party_mut(&mut self) -> &mut [Unit] {
        &mut self.party
    }

    pub fn enemies_mut(&mut self) -> &mut [Unit] {
        &mut self.enemies
    }

    pub fn roster(&self, side: Side) -> &[Unit] {
        match side {
            Side::Party => &self.party,
            Side::Enemy => &self.enemies,
        }
    }

    pub(crate) fn roster_mut(&mut self, side: Side) -> &mut Vec<Unit> {
        match side {
            Side::Party => &mut self.party,
            Side::Enemy => &mut self.enemies,
        }
    }

    pub fn unit_by_id(&self, id: UnitId) -> Option<&Unit> {
        self.party
            .iter()
            .chain(self.enemies.iter())
            .find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.party
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .find(|unit| unit.id == id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.unit_by_id(id).is_some()
    }

    pub fn leader(&self) -> Option<&Unit> {
        self.party.iter().find(|unit| unit.leader)
    }

    /// Grant experience to every party member (quest rewards, kills)
    pub fn grant_party_experience(&mut self, amount: i32) {
        for unit in &mut self.party {
            unit.grant_experience(amount);
        }
    }

    /// Some(outcome) once either roster is empty
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.party.is_empty() {
            Some(BattleOutcome::Defeat)
        } else if self.enemies.is_empty() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_side() {
        let mut state = BattleState::new();
        let ally = state.add_party_member(Unit::new("Aric", 100.0, 10.0));
        let foe = state.add_enemy(Unit::new("Wolf", 80.0, 0.0));

        assert_eq!(state.unit_by_id(ally).map(|u| u.side), Some(Side::Party));
        assert_eq!(state.unit_by_id(foe).map(|u| u.side), Some(Side::Enemy));
    }

    #[test]
    fn test_lookup_spans_both_rosters() {
        let mut state = BattleState::new();
        let ally = state.add_party_member(Unit::new("Aric", 100.0, 10.0));
        let foe = state.add_enemy(Unit::new("Wolf", 80.0, 0.0));

        assert!(state.contains(ally));
        assert!(state.contains(foe));
        assert!(!state.contains(UnitId::new()));
    }

    #[test]
    fn test_leader_lookup() {
        let mut state = BattleState::new();
        state.add_party_member(Unit::new("Aric", 100.0, 10.0));
        let mut mira = Unit::new("Mira", 90.0, 30.0);
        mira.leader = true;
        state.add_party_member(mira);

        assert_eq!(state.leader().map(|u| u.name.as_str()), Some("Mira"));
    }

    #[test]
    fn test_party_experience_grant_hits_everyone() {
        let mut state = BattleState::new();
        state.add_party_member(Unit::new("Aric", 100.0, 10.0));
        state.add_party_member(Unit::new("Mira", 90.0, 30.0));
        state.add_enemy(Unit::new("Wolf", 80.0, 0.0));

        state.grant_party_experience(15);
        assert!(state.party().iter().all(|u| u.experience == 105));
        // Enemies are untouched
        assert_eq!(state.enemies()[0].experience, 90);
    }

    #[test]
    fn test_outcome() {
        let mut state = BattleState::new();
        assert_eq!(state.outcome(), Some(BattleOutcome::Defeat));

        state.add_party_member(Unit::new("Aric", 100.0, 10.0));
        assert_eq!(state.outcome(), Some(BattleOutcome::Victory));

        state.add_enemy(Unit::new("Wolf", 80.0, 0.0));
        assert_eq!(state.outcome(), None);
    }
}
