//! Engine configuration with documented constants
//!
//! Tunable values are collected here and passed explicitly to the tick
//! driver and targeting service. There is no global config instance: the
//! embedding game constructs one and threads it through.

use crate::core::error::{GambitError, Result};

/// Configuration for the combat engine
///
/// These values reproduce the reference balance. Changing them affects
/// pacing and targeting reach.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Radius of the "in range" targeting query (world units)
    ///
    /// Conditions that scan the opposing roster (nearest visible,
    /// weak-to-element) only consider units strictly closer than this.
    pub attack_range: f32,

    /// Flat weapon attack value fed into physical damage resolution
    ///
    /// Stands in for an equipment system; every attacker swings with the
    /// same weapon strength.
    pub weapon_attack: i32,

    /// Slack applied when counting down the pre-cast delay
    ///
    /// Delays are compared against this instead of exact zero so that
    /// accumulated floating-point jitter cannot stall a cast.
    pub timer_epsilon: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            attack_range: 10.0,
            weapon_attack: 12,
            timer_epsilon: 0.01,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.attack_range <= 0.0 {
            return Err(GambitError::InvalidConfig(format!(
                "attack_range ({}) must be positive",
                self.attack_range
            )));
        }
        if self.weapon_attack <= 0 {
            return Err(GambitError::InvalidConfig(format!(
                "weapon_attack ({}) must be positive",
                self.weapon_attack
            )));
        }
        if self.timer_epsilon < 0.0 {
            return Err(GambitError::InvalidConfig(format!(
                "timer_epsilon ({}) must not be negative",
                self.timer_epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_range_rejected() {
        let config = EngineConfig {
            attack_range: -1.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_weapon_attack_rejected() {
        let config = EngineConfig {
            weapon_attack: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
