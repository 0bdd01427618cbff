//! Prebuilt gambit loadouts matching the reference party setup
//!
//! Empty slots are real: the player fills them in from the editor, and the
//! engine treats them as inert until then.

use crate::gambit::action::GambitAction;
use crate::gambit::condition::TargetCondition;
use crate::gambit::rule::GambitRule;

/// Leader kit: heal whoever drops low, otherwise attack what's in front
pub fn leader_loadout() -> Vec<GambitRule> {
    vec![
        GambitRule::new(
            TargetCondition::AllyHpBelow { percent: 50.0 },
            GambitAction::Cure,
        ),
        GambitRule::new(TargetCondition::NearestVisible, GambitAction::Attack),
        GambitRule::empty(),
        GambitRule::empty(),
    ]
}

/// Party member kit: pile onto the leader's target
pub fn member_loadout() -> Vec<GambitRule> {
    vec![
        GambitRule::new(TargetCondition::PartyLeaderTarget, GambitAction::Attack),
        GambitRule::empty(),
        GambitRule::empty(),
    ]
}

/// Enemy kit: attack the first thing in range
pub fn enemy_loadout() -> Vec<GambitRule> {
    vec![GambitRule::new(
        TargetCondition::NearestVisible,
        GambitAction::Attack,
    )]
}
