//! Fixed timestep simulation tick
//!
//! Input commands and the periodic tick are the only ways the state changes.

use super::state::GameState;

/// User input commands (one per key press)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    TogglePierce,
    /// Ends the session; never touches the state
    Quit,
}

/// Whether the driver should keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Characters destroyed (equals the score gained)
    pub destroyed: u32,
    /// Projectiles that left the top of the playfield
    pub expired: u32,
}

/// Apply a single input command
pub fn apply(state: &mut GameState, command: Command) -> Flow {
    match command {
        Command::MoveLeft => state.move_left(),
        Command::MoveRight => state.move_right(),
        Command::Fire => state.fire(),
        Command::TogglePierce => state.toggle_pierce(),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Advance the game state by one time step.
///
/// Projectiles are processed in firing order. A projectile already on row 0
/// is discarded (it would leave the grid); otherwise it moves up one row and
/// destroys whatever non-blank cell it lands on. Without pierce mode the hit
/// consumes the projectile.
pub fn tick(state: &mut GameState) -> TickReport {
    state.time_ticks += 1;

    let mut report = TickReport::default();
    let pierce = state.pierce;
    let grid = &mut state.grid;
    let mut hits = 0u64;

    state.projectiles.retain_mut(|p| {
        if p.y == 0 {
            report.expired += 1;
            return false;
        }
        p.y -= 1;

        if grid.blank(p.x, p.y) {
            log::debug!("Hit at ({}, {})", p.x, p.y);
            report.destroyed += 1;
            hits += 1;
            return pierce;
        }
        true
    });

    state.score += hits;
    if report.expired > 0 {
        log::trace!("{} projectile(s) left the playfield", report.expired);
    }
    report
}
