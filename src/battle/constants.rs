//! Combat constants - reference balance values in one place

// Actions
pub const CURE_HEAL_PERCENT: f32 = 40.0;
pub const FIRE_MAGIC_SCALER: f32 = 0.3;
pub const FIRE_WEAK_DAMAGE: f32 = 130.0;
pub const FIRE_WEAK_TEXT: &str = "WEAK";
pub const STEAL_LOOT_TEXT: &str = "Stole: Potion";

// Defeat
pub const DEFEAT_EXPERIENCE_TEXT: &str = "15 Exp.";

// Leveling
pub const LEVEL_HEALTH_INCREMENT: i32 = 8;
pub const LEVEL_HEALTH_CURVE: f32 = 0.6;
pub const EXPERIENCE_CURVE_SCALER: i32 = 10;

// Time step used by the demo loop (seconds of battle time per tick)
pub const BATTLE_TICK_SECONDS: f32 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cure_percent_is_a_relative_heal() {
        assert!(CURE_HEAL_PERCENT > 0.0 && CURE_HEAL_PERCENT <= 100.0);
    }

    #[test]
    fn test_fire_weak_damage_dwarfs_normal_scaling() {
        // A magic stat of 20 deals 0.3 * 400 = 120; the weakness override
        // must stay above that to read as a decimation.
        assert!(FIRE_WEAK_DAMAGE > FIRE_MAGIC_SCALER * 400.0);
    }

    #[test]
    fn test_level_curve_positive() {
        assert!(LEVEL_HEALTH_INCREMENT > 0);
        assert!(LEVEL_HEALTH_CURVE > 0.0);
        assert!(EXPERIENCE_CURVE_SCALER > 0);
    }
}
