//! Gambit engine demo - interactive skirmish loop
//!
//! Loads the bundled scenario, then advances the battle tick by tick from
//! the terminal, printing every presentation intent the engine emits.

use gambit_engine::battle::constants::BATTLE_TICK_SECONDS;
use gambit_engine::battle::events::CombatEvent;
use gambit_engine::battle::state::{BattleOutcome, BattleState};
use gambit_engine::core::config::EngineConfig;
use gambit_engine::core::error::Result;
use gambit_engine::scenario::Scenario;
use gambit_engine::simulation::tick::run_battle_tick;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("gambit_engine=info")
        .init();

    tracing::info!("Gambit engine demo starting...");

    let config = EngineConfig::default();
    config.validate()?;

    let mut state = Scenario::default_skirmish()?.build()?;
    let mut rng = ChaCha8Rng::from_entropy();

    println!("\n=== GAMBIT SKIRMISH ===");
    println!("Party gambits run automatically; watch the intents fly.");
    println!();
    println!("Commands:");
    println!("  tick / t        - Advance the battle by one tick");
    println!("  run <n>         - Run n ticks");
    println!("  status / s      - Show detailed unit status");
    println!("  quit / q        - Exit");
    println!();

    loop {
        display_summary(&state);

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "tick" | "t" => step(&mut state, &config, &mut rng, 1),
            "status" | "s" => display_status(&state),
            "quit" | "q" => break,
            cmd if cmd.starts_with("run ") => {
                match cmd.trim_start_matches("run ").trim().parse::<u32>() {
                    Ok(count) => step(&mut state, &config, &mut rng, count),
                    Err(_) => println!("Usage: run <n>"),
                }
            }
            "" => {}
            other => println!("Unknown command: {other}"),
        }

        match state.outcome() {
            Some(BattleOutcome::Victory) => {
                println!("\nThe party is victorious!");
                break;
            }
            Some(BattleOutcome::Defeat) => {
                println!("\nThe party has fallen...");
                break;
            }
            None => {}
        }
    }

    Ok(())
}

fn step(state: &mut BattleState, config: &EngineConfig, rng: &mut ChaCha8Rng, count: u32) {
    for _ in 0..count {
        let events = run_battle_tick(state, BATTLE_TICK_SECONDS, config, rng);
        for event in &events {
            print_event(state, event);
        }
        if state.outcome().is_some() {
            break;
        }
    }
}

fn print_event(state: &BattleState, event: &CombatEvent) {
    match event {
        CombatEvent::FloatingText { text, position } => {
            println!("  float \"{}\" at ({:.1}, {:.1})", text, position.x, position.z);
        }
        CombatEvent::EffectSpawned { effect, unit } => {
            let name = state
                .unit_by_id(*unit)
                .map(|u| u.name.as_str())
                .unwrap_or("fallen unit");
            println!("  effect {:?} on {}", effect, name);
        }
        CombatEvent::CombatLog { source, action } => {
            println!("  log: {} used {}.", source, action);
        }
        CombatEvent::UnitDefeated { .. } => {
            println!("  a unit has been defeated");
        }
    }
}

fn display_summary(state: &BattleState) {
    let party: Vec<String> = state
        .party()
        .iter()
        .map(|u| format!("{} {:.0}/{:.0}", u.name, u.health, u.max_health))
        .collect();
    let enemies: Vec<String> = state
        .enemies()
        .iter()
        .map(|u| format!("{} {:.0}/{:.0}", u.name, u.health, u.max_health))
        .collect();
    println!(
        "[tick {}] party: {} | enemies: {}",
        state.current_tick,
        party.join(", "),
        enemies.join(", ")
    );
}

fn display_status(state: &BattleState) {
    println!("--- Party ---");
    for unit in state.party() {
        display_unit(unit);
    }
    println!("--- Enemies ---");
    for unit in state.enemies() {
        display_unit(unit);
    }
}

fn display_unit(unit: &gambit_engine::battle::units::Unit) {
    let casting = match unit.cast_progress() {
        Some(progress) => format!("casting {:.0}%", progress * 100.0),
        None => "idle".to_string(),
    };
    println!(
        "  {} (lv {}) HP {:.0}/{:.0} MP {:.0}/{:.0} - {}",
        unit.name, unit.level, unit.health, unit.max_health, unit.mana, unit.max_mana, casting
    );
    for (rank, rule) in unit.rules().iter().enumerate() {
        let condition = rule
            .condition
            .as_ref()
            .map(|c| c.name())
            .unwrap_or_else(|| "--".to_string());
        let action = rule.action.map(|a| a.name()).unwrap_or("--");
        let enabled = if rule.enabled { "ON " } else { "OFF" };
        println!("    {rank}: [{enabled}] {condition} -> {action}");
    }
}
