//! Presentation intents emitted during combat ticks
//!
//! The engine never renders: it returns these from `run_battle_tick` for a
//! presentation layer to turn into damage numbers, particle effects and log
//! lines. Fire-and-forget; no reply is expected.

use crate::core::types::{Side, UnitId, Vec3};
use crate::gambit::action::EffectKind;

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// Float a label (damage number, "WEAK", loot text) at a world position
    FloatingText { text: String, position: Vec3 },
    /// Play a visual effect on a unit
    EffectSpawned { effect: EffectKind, unit: UnitId },
    /// Append "<source> used <action>." to the combat log
    CombatLog { source: String, action: String },
    /// A unit hit zero health and left its roster
    UnitDefeated { unit: UnitId, side: Side },
}
