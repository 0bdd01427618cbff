//! Target conditions - the "if" half of a gambit rule
//!
//! Evaluation RETURNS the bound target rather than storing it on the
//! condition, so sharing a condition value between rule slots can never
//! leak a stale target. The round-robin variant carries its cursor inline;
//! the cursor lives and dies with the rule slot that owns it.

use serde::{Deserialize, Serialize};

use crate::battle::state::BattleState;
use crate::battle::targeting::opposing_in_range;
use crate::battle::units::{Unit, Weakness};
use crate::core::config::EngineConfig;
use crate::core::types::UnitId;

/// Which roster a condition selects from, for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GambitTargetKind {
    Ally,
    Enemy,
    Disabled,
}

/// A predicate over battle state that binds a single target when satisfied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetCondition {
    /// First ally at or below 70% health
    AllyHpBelow70,
    /// First ally at or below the given health percent
    AllyHpBelow { percent: f32 },
    /// The leader's enemy target, only while its health percent sits
    /// exactly at the given value (chains a follow-up onto the leader)
    TargetHealthAt { percent: f32 },
    /// First opposing unit inside attack range, in roster order
    NearestVisible,
    /// First opposing unit in range whose weakness matches the element
    WeakToElement { element: Weakness },
    /// Round-robin over the allied party; restarts when the rule's action
    /// changes, fails once every member has been served
    AnyAlly {
        #[serde(skip)]
        last_action: Option<crate::gambit::action::GambitAction>,
        #[serde(skip)]
        next_index: usize,
    },
    /// Always binds the instigator
    SelfTarget,
    /// Whatever enemy the party leader is currently committed against
    PartyLeaderTarget,
}

impl TargetCondition {
    /// Round-robin condition with a fresh cursor
    pub fn any_ally() -> Self {
        TargetCondition::AnyAlly {
            last_action: None,
            next_index: 0,
        }
    }

    /// Display name shown in the gambit editor
    pub fn name(&self) -> String {
        match self {
            TargetCondition::AllyHpBelow70 => "Ally: HP < 70%".to_string(),
            TargetCondition::AllyHpBelow { percent } => format!("Ally: HP <= {}%", percent),
            TargetCondition::TargetHealthAt { percent } => format!("Target: HP at {}%", percent),
            TargetCondition::NearestVisible => "Target: Nearest Visible".to_string(),
            TargetCondition::WeakToElement { element } => format!("Target: Weak to {:?}", element),
            TargetCondition::AnyAlly { .. } => "Target: Any".to_string(),
            TargetCondition::SelfTarget => "Target: Self".to_string(),
            TargetCondition::PartyLeaderTarget => "Target: Party Leader Target".to_string(),
        }
    }

    pub fn target_kind(&self) -> GambitTargetKind {
        match self {
            TargetCondition::AllyHpBelow70
            | TargetCondition::AllyHpBelow { .. }
            | TargetCondition::AnyAlly { .. }
            | TargetCondition::SelfTarget => GambitTargetKind::Ally,
            TargetCondition::TargetHealthAt { .. }
            | TargetCondition::NearestVisible
            | TargetCondition::WeakToElement { .. }
            | TargetCondition::PartyLeaderTarget => GambitTargetKind::Enemy,
        }
    }

    /// Evaluate against the current battle state and bind a target
    ///
    /// Never mutates any unit; only the round-robin cursor may change.
    /// `action` is the owning rule's action, which the round-robin variant
    /// uses to detect when its cursor must restart.
    pub fn evaluate(
        &mut self,
        instigator: &Unit,
        action: crate::gambit::action::GambitAction,
        state: &BattleState,
        config: &EngineConfig,
    ) -> Option<UnitId> {
        match self {
            TargetCondition::AllyHpBelow70 => first_ally_at_or_below(state, 70.0),
            TargetCondition::AllyHpBelow { percent } => first_ally_at_or_below(state, *percent),
            TargetCondition::TargetHealthAt { percent } => {
                let target = leader_enemy_target(state)?;
                let unit = state.unit_by_id(target)?;
                health_percent_equals(unit.health_percent(), *percent).then_some(target)
            }
            TargetCondition::NearestVisible => {
                // First in range in roster order, NOT closest-first.
                let pool = opposing_in_range(state, instigator, config)?;
                pool.first().map(|unit| unit.id)
            }
            TargetCondition::WeakToElement { element } => {
                let pool = opposing_in_range(state, instigator, config)?;
                pool.iter().find(|unit| unit.weakness == *element).map(|unit| unit.id)
            }
            TargetCondition::AnyAlly {
                last_action,
                next_index,
            } => {
                let party = state.party();
                if party.is_empty() {
                    return None;
                }
                if *last_action == Some(action) {
                    if *next_index < party.len() {
                        let target = party[*next_index].id;
                        *next_index += 1;
                        Some(target)
                    } else {
                        // Every member served; wait for the action to change.
                        None
                    }
                } else {
                    *last_action = Some(action);
                    let target = party[0].id;
                    *next_index = 1;
                    Some(target)
                }
            }
            TargetCondition::SelfTarget => Some(instigator.id),
            TargetCondition::PartyLeaderTarget => leader_enemy_target(state),
        }
    }
}

fn first_ally_at_or_below(state: &BattleState, threshold: f32) -> Option<UnitId> {
    state
        .party()
        .iter()
        .find(|unit| unit.health_percent() <= threshold)
        .map(|unit| unit.id)
}

/// The enemy unit the party leader is currently committed against
///
/// Requires the leader's committed rule to target the enemy side; reads
/// whatever the leader's state machine has resolved so far this tick.
fn leader_enemy_target(state: &BattleState) -> Option<UnitId> {
    let leader = state.party().iter().find(|unit| unit.leader)?;
    let commitment = leader.commitment()?;
    let rule = leader.rules().get(commitment.rule_index)?;
    let condition = rule.condition.as_ref()?;
    if condition.target_kind() == GambitTargetKind::Enemy {
        Some(commitment.target)
    } else {
        None
    }
}

/// Exact comparison of health percentages, isolated so a tolerance fix is
/// a one-line change
#[allow(clippy::float_cmp)]
fn health_percent_equals(actual: f32, expected: f32) -> bool {
    actual == expected
}
