//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduler wake-up, no wall-clock reads
//! - Stable iteration order (projectiles in firing order)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{GameState, Projectile};
pub use tick::{Command, Flow, TickReport, apply, tick};
