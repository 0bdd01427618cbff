//! Tick-driven simulation of the combat decision loop

pub mod tick;

pub use tick::run_battle_tick;
