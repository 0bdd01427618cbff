//! Range queries for the targeting service

use crate::battle::state::BattleState;
use crate::battle::units::Unit;
use crate::core::config::EngineConfig;

/// Every unit in `pool` strictly closer than `radius` to `source`
///
/// Returns None rather than an empty list when nothing is in range; callers
/// rely on the distinction to tell "no candidates" from "a candidate pool".
pub fn units_in_range<'a>(source: &Unit, pool: &'a [Unit], radius: f32) -> Option<Vec<&'a Unit>> {
    let units: Vec<&Unit> = pool
        .iter()
        .filter(|unit| source.position.distance(&unit.position) < radius)
        .collect();

    if units.is_empty() {
        None
    } else {
        Some(units)
    }
}

/// In-range units on the roster opposing the instigator's side
pub fn opposing_in_range<'a>(
    state: &'a BattleState,
    source: &Unit,
    config: &EngineConfig,
) -> Option<Vec<&'a Unit>> {
    units_in_range(
        source,
        state.roster(source.side.opposing()),
        config.attack_range,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    fn unit_at(name: &str, x: f32) -> Unit {
        let mut unit = Unit::new(name, 100.0, 0.0);
        unit.position = Vec3::new(x, 0.0, 0.0);
        unit
    }

    #[test]
    fn test_strictly_less_than_radius() {
        let source = unit_at("Source", 0.0);
        let pool = vec![unit_at("Edge", 10.0), unit_at("Inside", 9.99)];

        let hits = units_in_range(&source, &pool, 10.0).expect("one unit in range");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Inside");
    }

    #[test]
    fn test_none_when_empty() {
        let source = unit_at("Source", 0.0);
        let pool = vec![unit_at("Far", 50.0)];

        assert!(units_in_range(&source, &pool, 10.0).is_none());
        assert!(units_in_range(&source, &[], 10.0).is_none());
    }

    #[test]
    fn test_preserves_pool_order() {
        let source = unit_at("Source", 0.0);
        let pool = vec![unit_at("A", 8.0), unit_at("B", 3.0), unit_at("C", 5.0)];

        let hits = units_in_range(&source, &pool, 10.0).expect("all in range");
        let names: Vec<&str> = hits.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_opposing_pool_follows_instigator_side() {
        let mut state = BattleState::new();
        state.add_party_member(unit_at("Aric", 0.0));
        state.add_enemy(unit_at("Wolf", 4.0));

        let config = EngineConfig::default();

        let ally = state.party()[0].clone();
        let from_ally = opposing_in_range(&state, &ally, &config).expect("enemy in range");
        assert_eq!(from_ally[0].name, "Wolf");

        let foe = state.enemies()[0].clone();
        let from_foe = opposing_in_range(&state, &foe, &config).expect("ally in range");
        assert_eq!(from_foe[0].name, "Aric");
    }
}
