//! Declarative battle scenarios loaded from TOML
//!
//! A scenario lists both rosters as stat blocks plus a named loadout; it
//! validates and assembles into a ready `BattleState`. A default skirmish
//! is baked into the crate for the demo binary and tests.

pub mod loadouts;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::battle::state::BattleState;
use crate::battle::units::{Unit, UnitStats, Weakness};
use crate::core::error::{GambitError, Result};

const DEFAULT_SKIRMISH: &str = include_str!("../../data/skirmish.toml");

/// Named gambit kit assigned to a scenario unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loadout {
    Leader,
    Member,
    Enemy,
    /// No rules; the unit idles until configured
    #[default]
    None,
}

/// One unit's stat block in a scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: i32,
    pub max_health: f32,
    #[serde(default)]
    pub max_mana: f32,
    #[serde(default)]
    pub stats: UnitStats,
    #[serde(default)]
    pub weakness: Weakness,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub leader: bool,
    #[serde(default)]
    pub start_delay: f32,
    #[serde(default)]
    pub loadout: Loadout,
}

fn default_level() -> i32 {
    3
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub party: Vec<UnitSpec>,
    #[serde(default)]
    pub enemies: Vec<UnitSpec>,
}

impl Scenario {
    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The crate's built-in demo skirmish
    pub fn default_skirmish() -> Result<Self> {
        Self::from_toml(DEFAULT_SKIRMISH)
    }

    pub fn validate(&self) -> Result<()> {
        let leaders = self.party.iter().filter(|spec| spec.leader).count();
        if leaders > 1 {
            return Err(GambitError::InvalidScenario(format!(
                "expected at most one party leader, found {leaders}"
            )));
        }
        for spec in self.party.iter().chain(self.enemies.iter()) {
            if spec.max_health <= 0.0 {
                return Err(GambitError::InvalidScenario(format!(
                    "unit '{}' has non-positive max_health",
                    spec.name
                )));
            }
            if spec.stats.speed <= 0 {
                return Err(GambitError::InvalidScenario(format!(
                    "unit '{}' has non-positive speed",
                    spec.name
                )));
            }
        }
        Ok(())
    }

    /// Assemble both rosters into a fresh battle state
    pub fn build(&self) -> Result<BattleState> {
        self.validate()?;
        let mut state = BattleState::new();
        for spec in &self.party {
            state.add_party_member(spec.build_unit());
        }
        for spec in &self.enemies {
            state.add_enemy(spec.build_unit());
        }
        tracing::info!(
            party = state.party().len(),
            enemies = state.enemies().len(),
            "scenario assembled"
        );
        Ok(state)
    }
}

impl UnitSpec {
    fn build_unit(&self) -> Unit {
        let mut unit =
            Unit::new(self.name.clone(), self.max_health, self.max_mana).with_level(self.level);
        unit.stats = self.stats;
        unit.weakness = self.weakness;
        unit.position = self.position.into();
        unit.leader = self.leader;
        unit.start_delay = self.start_delay;
        unit.start_delay_remaining = self.start_delay;

        let rules = match self.loadout {
            Loadout::Leader => loadouts::leader_loadout(),
            Loadout::Member => loadouts::member_loadout(),
            Loadout::Enemy => loadouts::enemy_loadout(),
            Loadout::None => Vec::new(),
        };
        for rule in rules {
            unit.add_rule(rule);
        }
        unit
    }
}
