//! Combat units: stats, health and mana bookkeeping, gambit list, cast timers
//!
//! A unit exclusively owns its gambit rule list and its timer state. Health
//! and mana are clamped to `[0, maximum]` after every mutation.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    EXPERIENCE_CURVE_SCALER, LEVEL_HEALTH_CURVE, LEVEL_HEALTH_INCREMENT,
};
use crate::core::types::{Side, UnitId, Vec3};
use crate::gambit::action::GambitAction;
use crate::gambit::condition::TargetCondition;
use crate::gambit::rule::GambitRule;

/// Elemental weakness a unit can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weakness {
    #[default]
    None,
    Fire,
    Wind,
    Water,
    Electricity,
}

/// Combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStats {
    /// Physical offense power
    pub strength: i32,
    /// Magic offense power
    pub magic: i32,
    /// Hit chance
    pub skill: i32,
    /// Cast-time multiplier (1 is the baseline)
    pub speed: i32,
    /// Crit rate
    pub luck: i32,
    /// Defense against physical
    pub defense: i32,
    /// Defense against magic
    pub resistance: i32,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            strength: 5,
            magic: 5,
            skill: 5,
            speed: 1,
            luck: 5,
            defense: 5,
            resistance: 5,
        }
    }
}

/// A unit's selected rule plus its cast-timer pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    /// Index of the committed rule in the owning unit's list
    pub rule_index: usize,
    /// Target bound by the rule's condition at commit time
    pub target: UnitId,
    pub cast_remaining: f32,
    pub cast_ceiling: f32,
}

impl Commitment {
    /// Cast progress in `[0, 1]` for progress-bar display
    pub fn progress(&self) -> f32 {
        if self.cast_ceiling <= 0.0 {
            return 1.0;
        }
        (1.0 - self.cast_remaining / self.cast_ceiling).clamp(0.0, 1.0)
    }
}

/// A combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub side: Side,
    pub position: Vec3,

    pub level: i32,
    pub experience: i32,
    pub next_level_experience: i32,

    pub health: f32,
    pub max_health: f32,
    pub mana: f32,
    pub max_mana: f32,

    pub weakness: Weakness,
    pub stats: UnitStats,

    pub leader: bool,
    /// Units with gambits disabled never scan or cast, but still die
    pub gambits_enabled: bool,

    /// Configured pre-cast delay, restored after each execution
    pub start_delay: f32,
    pub(crate) start_delay_remaining: f32,

    pub(crate) rules: Vec<GambitRule>,
    pub(crate) commitment: Option<Commitment>,
}

fn level_start_experience(level: i32) -> i32 {
    level * level * EXPERIENCE_CURVE_SCALER
}

impl Unit {
    pub fn new(name: impl Into<String>, max_health: f32, max_mana: f32) -> Self {
        let level = 3;
        Self {
            id: UnitId::new(),
            name: name.into(),
            side: Side::Party,
            position: Vec3::default(),
            level,
            experience: level_start_experience(level),
            next_level_experience: level_start_experience(level + 1),
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            weakness: Weakness::None,
            stats: UnitStats::default(),
            leader: false,
            gambits_enabled: true,
            start_delay: 0.0,
            start_delay_remaining: 0.0,
            rules: Vec::new(),
            commitment: None,
        }
    }

    /// Set the starting level without applying level-up growth
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self.experience = level_start_experience(level);
        self.next_level_experience = level_start_experience(level + 1);
        self
    }

    /*************** HEALTH AND MANA ***********/

    /// Health as a percentage of maximum; a non-positive maximum reads as 0%
    pub fn health_percent(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        self.health / self.max_health * 100.0
    }

    pub fn change_health(&mut self, delta: f32) {
        self.health = (self.health + delta).clamp(0.0, self.max_health.max(0.0));
    }

    /// Heal or hurt by a percentage of maximum health
    pub fn change_health_relative(&mut self, percent: f32) {
        self.change_health(self.max_health * percent / 100.0);
    }

    pub fn change_mana(&mut self, delta: f32) {
        self.mana = (self.mana + delta).clamp(0.0, self.max_mana.max(0.0));
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /*************** LEVEL AND EXPERIENCE ***********/

    /// Jump to a level: experience counters reset to the level baseline and
    /// maximum health grows along the level curve
    pub fn set_level(&mut self, level: i32) {
        self.level = level;
        self.experience = level_start_experience(level);
        self.next_level_experience = level_start_experience(level + 1);

        let grown = self.max_health
            + (level * LEVEL_HEALTH_INCREMENT) as f32
            + (level as f32).powi(2) * LEVEL_HEALTH_CURVE;
        self.max_health = grown.trunc();
    }

    /// Add experience, cascading through as many level-ups as the grant
    /// covers; returns whether at least one level was gained
    ///
    /// Terminates because the threshold grows quadratically while each
    /// recursive grant shrinks; non-positive grants return immediately.
    pub fn grant_experience(&mut self, amount: i32) -> bool {
        if amount <= 0 {
            return false;
        }
        self.experience += amount;
        if self.experience > self.next_level_experience {
            let remainder = self.experience - self.next_level_experience;
            self.set_level(self.level + 1);
            self.grant_experience(remainder);
            return true;
        }
        false
    }

    /*************** GAMBITS ***********/

    pub fn add_rule(&mut self, rule: GambitRule) {
        self.rules.push(rule);
        self.gambits_changed();
    }

    pub fn rules(&self) -> &[GambitRule] {
        &self.rules
    }

    /// Drop any in-progress commitment so the next tick re-scans the list
    pub fn gambits_changed(&mut self) {
        self.commitment = None;
    }

    pub fn toggle_rule(&mut self, index: usize) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.toggle_enabled();
            self.gambits_changed();
        }
    }

    /// Swap two rule slots, exchanging their priority ranks
    pub fn swap_rules(&mut self, a: usize, b: usize) {
        if a != b && a < self.rules.len() && b < self.rules.len() {
            self.rules.swap(a, b);
            self.gambits_changed();
        }
    }

    pub fn set_rule_condition(&mut self, index: usize, condition: Option<TargetCondition>) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.condition = condition;
            self.gambits_changed();
        }
    }

    pub fn set_rule_action(&mut self, index: usize, action: Option<GambitAction>) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.action = action;
            self.gambits_changed();
        }
    }

    /*************** CAST STATE ***********/

    pub fn commitment(&self) -> Option<&Commitment> {
        self.commitment.as_ref()
    }

    /// Cast progress in `[0, 1]`, or None while idle
    pub fn cast_progress(&self) -> Option<f32> {
        self.commitment.as_ref().map(Commitment::progress)
    }

    pub fn remaining_start_delay(&self) -> f32 {
        self.start_delay_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_health_clamps_to_bounds() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);

        unit.change_health(-150.0);
        assert_eq!(unit.health, 0.0);

        unit.change_health(500.0);
        assert_eq!(unit.health, 100.0);
    }

    #[test]
    fn test_mana_clamps_to_bounds() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);

        unit.change_mana(-100.0);
        assert_eq!(unit.mana, 0.0);

        unit.change_mana(35.0);
        assert_eq!(unit.mana, 20.0);
    }

    #[test]
    fn test_relative_heal_clamps_at_maximum() {
        let mut unit = Unit::new("Aric", 200.0, 0.0);
        unit.change_health(-50.0);

        unit.change_health_relative(40.0);
        assert_eq!(unit.health, 200.0);
    }

    #[test]
    fn test_health_percent_guards_zero_maximum() {
        let mut unit = Unit::new("Husk", 0.0, 0.0);
        unit.health = 10.0;
        assert_eq!(unit.health_percent(), 0.0);
    }

    #[test]
    fn test_health_percent() {
        let mut unit = Unit::new("Aric", 200.0, 0.0);
        unit.change_health(-50.0);
        assert_eq!(unit.health_percent(), 75.0);
    }

    #[test]
    fn test_new_unit_starts_at_level_three_baseline() {
        let unit = Unit::new("Aric", 100.0, 20.0);
        assert_eq!(unit.level, 3);
        assert_eq!(unit.experience, 90);
        assert_eq!(unit.next_level_experience, 160);
    }

    #[test]
    fn test_single_level_up_carries_remainder() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);

        // 90 + 80 = 170 > 160: level 4, baseline 160, remainder 10
        assert!(unit.grant_experience(80));
        assert_eq!(unit.level, 4);
        assert_eq!(unit.experience, 170);
        assert_eq!(unit.next_level_experience, 250);
    }

    #[test]
    fn test_multi_level_cascade() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);

        // 90 + 300 spans thresholds 160, 250 and 360
        assert!(unit.grant_experience(300));
        assert_eq!(unit.level, 6);
        assert_eq!(unit.experience, 390);
        assert_eq!(unit.next_level_experience, 490);
    }

    #[test]
    fn test_level_up_grows_max_health() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);
        let before = unit.max_health;
        unit.set_level(4);
        // 100 + 4*8 + 16*0.6 = 141.6, truncated
        assert_eq!(unit.max_health, 141.0);
        assert!(unit.max_health > before);
    }

    #[test]
    fn test_non_positive_grants_are_no_ops() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);
        assert!(!unit.grant_experience(0));
        assert!(!unit.grant_experience(-50));
        assert_eq!(unit.level, 3);
        assert_eq!(unit.experience, 90);
    }

    #[test]
    fn test_exact_threshold_does_not_level() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);
        // 90 + 70 = 160, not strictly above the threshold
        assert!(!unit.grant_experience(70));
        assert_eq!(unit.level, 3);
        assert_eq!(unit.experience, 160);
    }

    #[test]
    fn test_rule_mutations_invalidate_commitment() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);
        unit.add_rule(GambitRule::new(
            TargetCondition::SelfTarget,
            GambitAction::Cure,
        ));
        unit.add_rule(GambitRule::empty());

        let committed = Commitment {
            rule_index: 0,
            target: UnitId::new(),
            cast_remaining: 2.0,
            cast_ceiling: 4.0,
        };

        unit.commitment = Some(committed);
        unit.toggle_rule(0);
        assert!(unit.commitment.is_none());

        unit.commitment = Some(committed);
        unit.swap_rules(0, 1);
        assert!(unit.commitment.is_none());

        unit.commitment = Some(committed);
        unit.set_rule_action(0, Some(GambitAction::Fire));
        assert!(unit.commitment.is_none());

        // Out-of-range indices leave the commitment alone
        unit.commitment = Some(committed);
        unit.toggle_rule(99);
        assert!(unit.commitment.is_some());
    }

    #[test]
    fn test_cast_progress() {
        let mut unit = Unit::new("Aric", 100.0, 20.0);
        assert_eq!(unit.cast_progress(), None);

        unit.commitment = Some(Commitment {
            rule_index: 0,
            target: UnitId::new(),
            cast_remaining: 1.0,
            cast_ceiling: 4.0,
        });
        assert_eq!(unit.cast_progress(), Some(0.75));
    }

    #[test]
    fn test_cast_progress_guards_zero_ceiling() {
        let commitment = Commitment {
            rule_index: 0,
            target: UnitId::new(),
            cast_remaining: 0.0,
            cast_ceiling: 0.0,
        };
        assert_eq!(commitment.progress(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_health_and_mana_stay_clamped(deltas in prop::collection::vec(-500.0f32..500.0, 0..40)) {
            let mut unit = Unit::new("Prop", 137.0, 42.0);
            for delta in deltas {
                unit.change_health(delta);
                unit.change_mana(delta);
                prop_assert!(unit.health >= 0.0 && unit.health <= unit.max_health);
                prop_assert!(unit.mana >= 0.0 && unit.mana <= unit.max_mana);
            }
        }

        #[test]
        fn prop_relative_heal_stays_clamped(percents in prop::collection::vec(-200.0f32..200.0, 0..20)) {
            let mut unit = Unit::new("Prop", 250.0, 0.0);
            for percent in percents {
                unit.change_health_relative(percent);
                prop_assert!(unit.health >= 0.0 && unit.health <= unit.max_health);
            }
        }
    }
}
