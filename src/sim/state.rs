//! Game state and core simulation types
//!
//! All mutable session state lives here and is owned by a single driver.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::loader::Grid;

/// An upward-moving shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: usize,
    pub y: usize,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Destructible text
    pub grid: Grid,
    /// Playfield width (longest input row)
    pub width: usize,
    /// Playfield height (input rows + status margin)
    pub height: usize,
    /// Player column, pinned to the bottom row
    pub player_x: usize,
    /// Active projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Piercing mode: projectiles survive a hit
    pub pierce: bool,
    /// One point per destroyed character
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total shots fired this session
    pub shots_fired: u64,
}

impl GameState {
    /// Create a new game around the loaded grid, player centered
    pub fn new(grid: Grid) -> Self {
        let width = grid.width();
        let height = grid.row_count() + STATUS_MARGIN;
        Self {
            grid,
            width,
            height,
            player_x: width / 2,
            projectiles: Vec::new(),
            pierce: false,
            score: 0,
            time_ticks: 0,
            shots_fired: 0,
        }
    }

    pub fn move_left(&mut self) {
        if self.player_x > 0 {
            self.player_x -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.player_x + 1 < self.width {
            self.player_x += 1;
        }
    }

    /// Spawn a projectile just above the player. No cooldown.
    pub fn fire(&mut self) {
        self.projectiles.push(Projectile {
            x: self.player_x,
            y: self.height - 2,
        });
        self.shots_fired += 1;
    }

    pub fn toggle_pierce(&mut self) {
        self.pierce = !self.pierce;
        log::debug!("Pierce mode: {}", self.pierce);
    }

    /// Row the player sits on
    pub fn player_row(&self) -> usize {
        self.height - 1
    }
}
