//! Gambit rules: the conditions, actions and slots that pair them
//!
//! A gambit is a priority-ordered condition→action rule. Units carry an
//! ordered list of them and commit to the first one that matches each tick.

pub mod action;
pub mod condition;
pub mod rule;

pub use action::{ActionOutcome, EffectKind, GambitAction};
pub use condition::{GambitTargetKind, TargetCondition};
pub use rule::GambitRule;
