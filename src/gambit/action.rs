//! Gambit actions - the "then" half of a gambit rule
//!
//! Each variant is a named, costed, timed effect. Actions compute what
//! should happen as an `ActionOutcome`; the tick driver applies the health
//! delta, deducts the mana cost and turns the requests into events.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    CURE_HEAL_PERCENT, FIRE_MAGIC_SCALER, FIRE_WEAK_DAMAGE, FIRE_WEAK_TEXT, STEAL_LOOT_TEXT,
};
use crate::battle::resolution::resolve_damage;
use crate::battle::units::{Unit, Weakness};
use crate::core::config::EngineConfig;

/// Visual effect kinds the presentation layer knows how to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    BasicAttack,
    WhiteMagic,
    FireMagic,
}

/// An action a gambit rule can perform against its bound target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GambitAction {
    Attack,
    Steal,
    Cure,
    Fire,
}

/// What an action wants done to the world
///
/// The health delta targets the bound unit; the mana cost is deducted from
/// the source by the caller, never by the action itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub health_delta: f32,
    /// Label to float above the target
    pub text: String,
    pub effect: EffectKind,
    /// Combat-log line as (source name, action name)
    pub log: Option<(String, String)>,
}

impl GambitAction {
    pub fn name(&self) -> &'static str {
        match self {
            GambitAction::Attack => "Attack",
            GambitAction::Steal => "Steal",
            GambitAction::Cure => "Cure",
            GambitAction::Fire => "Fire",
        }
    }

    /// Base wind-up duration, scaled by the caster's speed at commit time
    pub fn cast_time(&self) -> f32 {
        match self {
            GambitAction::Attack => 2.3,
            GambitAction::Steal => 3.0,
            GambitAction::Cure => 4.0,
            GambitAction::Fire => 4.0,
        }
    }

    pub fn mana_cost(&self) -> i32 {
        match self {
            GambitAction::Attack | GambitAction::Steal => 0,
            GambitAction::Cure => 8,
            GambitAction::Fire => 6,
        }
    }

    /// Compute the action's effect on `target` when cast by `source`
    pub fn apply(
        &self,
        source: &Unit,
        target: &Unit,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> ActionOutcome {
        match self {
            GambitAction::Attack => {
                let damage = resolve_damage(source, target, config, rng);
                ActionOutcome {
                    health_delta: -(damage as f32),
                    text: damage.to_string(),
                    effect: EffectKind::BasicAttack,
                    log: None,
                }
            }
            GambitAction::Steal => ActionOutcome {
                health_delta: 0.0,
                text: STEAL_LOOT_TEXT.to_string(),
                effect: EffectKind::BasicAttack,
                log: None,
            },
            GambitAction::Cure => {
                let healed = target.max_health * CURE_HEAL_PERCENT / 100.0;
                ActionOutcome {
                    health_delta: healed,
                    text: (healed as i32).to_string(),
                    effect: EffectKind::WhiteMagic,
                    log: Some((source.name.clone(), self.name().to_string())),
                }
            }
            GambitAction::Fire => {
                let raw = FIRE_MAGIC_SCALER * (source.stats.magic as f32).powi(2);
                let (damage, text) = if target.weakness == Weakness::Fire {
                    (FIRE_WEAK_DAMAGE, FIRE_WEAK_TEXT.to_string())
                } else {
                    let truncated = raw.trunc();
                    (truncated, (truncated as i32).to_string())
                };
                ActionOutcome {
                    health_delta: -damage,
                    text,
                    effect: EffectKind::FireMagic,
                    log: Some((source.name.clone(), self.name().to_string())),
                }
            }
        }
    }
}
