//! Tick driver - advances every unit's decision state machine
//!
//! One discrete step per call, no preemption. Units advance in a fixed
//! order (party in insertion order, then enemies), so conditions that read
//! another unit's commitment — the leader-chaining gambits — see whatever
//! has been computed so far this tick. A unit placed after the leader
//! observes the leader's same-tick commitment; a unit placed before it sees
//! last tick's. Tests pin this ordering down.
//!
//! Per unit and tick: defeat check (short-circuits everything), rule scan
//! when idle, bound-target liveness check, pre-cast delay countdown, cast
//! countdown, execution.

use rand::Rng;

use crate::battle::constants::DEFEAT_EXPERIENCE_TEXT;
use crate::battle::events::CombatEvent;
use crate::battle::state::BattleState;
use crate::battle::units::Commitment;
use crate::core::config::EngineConfig;
use crate::core::types::{Side, UnitId};
use crate::gambit::rule::GambitRule;

/// Advance the whole battle by one tick of `dt` seconds
///
/// Returns the presentation intents the tick produced, in emission order.
pub fn run_battle_tick(
    state: &mut BattleState,
    dt: f32,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    for side in [Side::Party, Side::Enemy] {
        let mut index = 0;
        while index < state.roster(side).len() {
            if state.roster(side)[index].is_defeated() {
                handle_defeat(state, side, index, &mut events);
                // Removal shifted the roster; re-check the same slot.
                continue;
            }
            advance_unit(state, side, index, dt, config, rng, &mut events);
            index += 1;
        }
    }

    state.current_tick += 1;
    events
}

fn handle_defeat(state: &mut BattleState, side: Side, index: usize, events: &mut Vec<CombatEvent>) {
    let unit = state.roster_mut(side).remove(index);
    tracing::debug!(unit = %unit.name, "unit defeated");
    events.push(CombatEvent::FloatingText {
        text: DEFEAT_EXPERIENCE_TEXT.to_string(),
        position: unit.position,
    });
    events.push(CombatEvent::UnitDefeated {
        unit: unit.id,
        side,
    });
}

fn advance_unit(
    state: &mut BattleState,
    side: Side,
    index: usize,
    dt: f32,
    config: &EngineConfig,
    rng: &mut impl Rng,
    events: &mut Vec<CombatEvent>,
) {
    if !state.roster(side)[index].gambits_enabled {
        return;
    }

    if state.roster(side)[index].commitment.is_none() {
        select_rule(state, side, index, config);
    }

    let Some(commitment) = state.roster(side)[index].commitment else {
        return;
    };

    // The bound target may have been defeated since commit.
    if !state.contains(commitment.target) {
        state.roster_mut(side)[index].commitment = None;
        return;
    }

    {
        let unit = &mut state.roster_mut(side)[index];
        unit.start_delay_remaining -= dt;
        if unit.start_delay_remaining > config.timer_epsilon {
            return;
        }
    }

    let mut commitment = commitment;
    commitment.cast_remaining -= dt;
    if commitment.cast_remaining > 0.0 {
        state.roster_mut(side)[index].commitment = Some(commitment);
        return;
    }

    execute_action(state, side, index, commitment, config, rng, events);
}

/// Scan the rule list in priority order and commit to the first match
///
/// A rule qualifies when it is enabled, fully configured, its condition
/// binds a target, and its action is affordable. The condition runs before
/// the affordability check, so round-robin cursors advance even for rules
/// that are then skipped for mana.
fn select_rule(state: &mut BattleState, side: Side, index: usize, config: &EngineConfig) {
    // Lift the rule list out so conditions can borrow the rest of the state.
    let mut rules = std::mem::take(&mut state.roster_mut(side)[index].rules);
    let chosen = choose_rule(state, side, index, &mut rules, config);

    let unit = &mut state.roster_mut(side)[index];
    unit.rules = rules;

    if let Some((rule_index, target)) = chosen {
        if let Some(action) = unit.rules[rule_index].action {
            let ceiling = action.cast_time() * unit.stats.speed as f32;
            unit.commitment = Some(Commitment {
                rule_index,
                target,
                cast_remaining: ceiling,
                cast_ceiling: ceiling,
            });
            unit.start_delay_remaining = unit.start_delay;
            tracing::debug!(
                unit = %unit.name,
                action = action.name(),
                "committed to gambit rule"
            );
        }
    }
}

fn choose_rule(
    state: &BattleState,
    side: Side,
    index: usize,
    rules: &mut [GambitRule],
    config: &EngineConfig,
) -> Option<(usize, UnitId)> {
    let instigator = &state.roster(side)[index];

    for (rank, rule) in rules.iter_mut().enumerate() {
        if !rule.enabled {
            continue;
        }
        let Some(action) = rule.action else {
            continue;
        };
        let Some(condition) = rule.condition.as_mut() else {
            continue;
        };
        let Some(target) = condition.evaluate(instigator, action, state, config) else {
            continue;
        };
        if instigator.mana >= action.mana_cost() as f32 {
            return Some((rank, target));
        }
        // Not affordable this tick: fall through to lower-priority rules.
    }

    None
}

fn execute_action(
    state: &mut BattleState,
    side: Side,
    index: usize,
    commitment: Commitment,
    config: &EngineConfig,
    rng: &mut impl Rng,
    events: &mut Vec<CombatEvent>,
) {
    let source = &state.roster(side)[index];
    let Some(action) = source
        .rules
        .get(commitment.rule_index)
        .and_then(|rule| rule.action)
    else {
        state.roster_mut(side)[index].commitment = None;
        return;
    };
    let Some(target) = state.unit_by_id(commitment.target) else {
        state.roster_mut(side)[index].commitment = None;
        return;
    };

    tracing::debug!(
        unit = %source.name,
        action = action.name(),
        target = %target.name,
        "executing gambit action"
    );

    let outcome = action.apply(source, target, config, rng);
    let target_id = target.id;
    let target_position = target.position;

    if let Some(target) = state.unit_mut(target_id) {
        target.change_health(outcome.health_delta);
    }

    let unit = &mut state.roster_mut(side)[index];
    unit.change_mana(-(action.mana_cost() as f32));
    unit.commitment = None;
    unit.start_delay_remaining = unit.start_delay;

    events.push(CombatEvent::EffectSpawned {
        effect: outcome.effect,
        unit: target_id,
    });
    events.push(CombatEvent::FloatingText {
        text: outcome.text,
        position: target_position,
    });
    if let Some((source_name, action_name)) = outcome.log {
        events.push(CombatEvent::CombatLog {
            source: source_name,
            action: action_name,
        });
    }
}
