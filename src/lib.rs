//! Cmd Invader - shoot the characters out of piped text
//!
//! Core modules:
//! - `loader`: Turns raw piped text into the destructible grid
//! - `sim`: Deterministic simulation (player, projectiles, collisions, score)
//! - `renderer`: Plain-text frame projection of the game state
//! - `scheduler`: Fixed-cadence ticks merged with key input into one event stream
//! - `platform`: Terminal probing, key mapping and screen output
//! - `settings`: Optional user preferences

pub mod loader;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use loader::{Grid, LoadError};
pub use renderer::{Glyphs, Renderer};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tick scheduler cadence (milliseconds between simulation steps)
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// Rows added below the text for the player row and status spacing
    pub const STATUS_MARGIN: usize = 5;

    /// Default glyphs
    pub const PLAYER_GLYPH: char = 'A';
    pub const PROJECTILE_GLYPH: char = '|';
    /// A destroyed (or never filled) cell
    pub const BLANK: char = ' ';

    pub const LEGEND: &str =
        "←/→ or A/D or H/L: move player | SPACE: shot | P: Pierce mode | Q or CTRL+C: quit";
    pub const USAGE: &str = "Usage: <command> | cmd-invader";
}
