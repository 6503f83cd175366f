//! Cmd Invader entry point
//!
//! Reads piped text, then runs the game loop on the controlling terminal.

use std::io;
use std::process::ExitCode;

use cmd_invader::consts::USAGE;
use cmd_invader::platform::{self, TerminalEvents, TerminalScreen};
use cmd_invader::scheduler::{self, Scheduler};
use cmd_invader::sim::GameState;
use cmd_invader::{LoadError, Renderer, Settings, loader};

fn main() -> ExitCode {
    env_logger::init();

    if platform::is_interactive() {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let grid = match loader::load(io::stdin().lock()) {
        Ok(grid) => grid,
        Err(e @ LoadError::Empty) => {
            eprintln!("[Error] {}", e);
            return ExitCode::FAILURE;
        }
        Err(e @ LoadError::Read(_)) => {
            log::debug!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings::load();
    let state = GameState::new(grid);
    log::info!(
        "Cmd Invader starting: {}x{} playfield",
        state.width,
        state.height
    );

    match play(state, &settings) {
        Ok(state) => {
            println!(
                "Score: {} | shots fired: {} | characters left: {}",
                state.score,
                state.shots_fired,
                state.grid.non_blank_count()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the session; the screen guard is dropped before returning
fn play(state: GameState, settings: &Settings) -> io::Result<GameState> {
    let mut screen = TerminalScreen::new(settings.alternate_screen)?;
    let mut scheduler = Scheduler::with_default_interval(TerminalEvents);
    log::debug!("Tick interval: {:?}", scheduler.interval());
    let renderer = Renderer::new(settings.glyphs());
    scheduler::run(state, &mut scheduler, &renderer, &mut screen)
}
