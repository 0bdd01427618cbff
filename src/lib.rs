//! Gambit combat decision engine
//!
//! Units carry priority-ordered condition→action rules ("gambits") that are
//! evaluated every tick to pick an action and a target without direct
//! player input. The engine is a pure decision/state system: it mutates
//! health and mana, drives per-unit cast timers, and emits presentation
//! intents (floating text, effect spawns, combat-log lines) for an external
//! layer to render.

pub mod battle;
pub mod core;
pub mod gambit;
pub mod scenario;
pub mod simulation;
