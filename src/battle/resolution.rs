//! Physical damage resolution
//!
//! One formula, shared by every physical attack: flat weapon attack against
//! defense for the base, a strength-and-level scaled uniform roll for the
//! multiplier, and a square-root level curve on top.

use rand::Rng;

use crate::battle::units::Unit;
use crate::core::config::EngineConfig;

/// Damage `instigator` deals to `receiver` with a basic attack
///
/// `base = max(1, weapon_attack - defense)`, so heavy armor floors the hit
/// at 1 rather than healing. The multiplier draws a fresh uniform sample in
/// `[strength, strength + (strength + level) / 4]` (integer division, as
/// the reference balance rounds the spread down) and halves it. The final
/// product is truncated toward zero.
pub fn resolve_damage(
    instigator: &Unit,
    receiver: &Unit,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> i32 {
    let base = ((config.weapon_attack - receiver.stats.defense) as f32).max(1.0);

    let lower = instigator.stats.strength as f32;
    let upper =
        (instigator.stats.strength + (instigator.stats.strength + instigator.level) / 4) as f32;
    let multiplier = rng.gen_range(lower..=upper) / 2.0;

    let level_multiplier = 1.0 + (instigator.level as f32).sqrt() * 0.6;

    (base * multiplier * level_multiplier) as i32
}
