//! A single gambit slot: enabled flag plus optional condition and action
//!
//! The slot's index in its owning unit's list is its priority rank; lower
//! index wins. A slot missing either half is inert and never matches.

use serde::{Deserialize, Serialize};

use crate::gambit::action::GambitAction;
use crate::gambit::condition::TargetCondition;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GambitRule {
    pub enabled: bool,
    pub condition: Option<TargetCondition>,
    pub action: Option<GambitAction>,
}

impl GambitRule {
    pub fn new(condition: TargetCondition, action: GambitAction) -> Self {
        Self {
            enabled: true,
            condition: Some(condition),
            action: Some(action),
        }
    }

    /// An unconfigured slot, disabled until the player fills it in
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    /// A rule missing its condition or action can never match
    pub fn is_inert(&self) -> bool {
        self.condition.is_none() || self.action.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule_is_inert_and_disabled() {
        let rule = GambitRule::empty();
        assert!(rule.is_inert());
        assert!(!rule.enabled);
    }

    #[test]
    fn test_new_rule_is_enabled() {
        let rule = GambitRule::new(TargetCondition::NearestVisible, GambitAction::Attack);
        assert!(rule.enabled);
        assert!(!rule.is_inert());
    }

    #[test]
    fn test_half_filled_rule_is_inert() {
        let mut rule = GambitRule::empty();
        rule.action = Some(GambitAction::Attack);
        assert!(rule.is_inert());

        rule.condition = Some(TargetCondition::SelfTarget);
        assert!(!rule.is_inert());
    }

    #[test]
    fn test_toggle_enabled() {
        let mut rule = GambitRule::new(TargetCondition::SelfTarget, GambitAction::Cure);
        rule.toggle_enabled();
        assert!(!rule.enabled);
        rule.toggle_enabled();
        assert!(rule.enabled);
    }
}
