//! Battle-side state: units, rosters, targeting and damage resolution

pub mod constants;
pub mod events;
pub mod resolution;
pub mod state;
pub mod targeting;
pub mod units;

pub use constants::*;
pub use events::CombatEvent;
pub use resolution::resolve_damage;
pub use state::{BattleOutcome, BattleState};
pub use targeting::{opposing_in_range, units_in_range};
pub use units::{Commitment, Unit, UnitStats, Weakness};
