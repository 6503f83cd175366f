//! Tick scheduling and the session event loop
//!
//! Ticks and key presses are merged into one ordered stream and applied one
//! at a time. The next tick is armed only after the previous tick has been
//! applied and drawn, so a slow frame delays later ticks instead of queueing
//! them up.

use std::io;
use std::time::{Duration, Instant};

use crate::consts::TICK_INTERVAL_MS;
use crate::renderer::Renderer;
use crate::sim::{Command, Flow, GameState, apply, tick};

/// One entry of the merged event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick,
    Input(Command),
}

/// A source of user commands that can wait for the next one.
///
/// `Ok(None)` means no command arrived: the wait timed out or the event was
/// not a mapped key. The scheduler simply asks again with the time left.
pub trait EventSource {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Output surface for finished frames
pub trait FrameSink {
    fn present(&mut self, frame: &[String]) -> io::Result<()>;
}

/// Fixed-interval tick generator merged with an input source
pub struct Scheduler<S> {
    source: S,
    interval: Duration,
    deadline: Instant,
}

impl<S: EventSource> Scheduler<S> {
    /// First tick fires one interval from now
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            interval,
            deadline: Instant::now() + interval,
        }
    }

    pub fn with_default_interval(source: S) -> Self {
        Self::new(source, Duration::from_millis(TICK_INTERVAL_MS))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next tick or user command, whichever comes first
    pub fn next_event(&mut self) -> io::Result<Event> {
        loop {
            let remaining = self.deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(Event::Tick);
            }
            if let Some(command) = self.source.next_command(remaining)? {
                return Ok(Event::Input(command));
            }
        }
    }

    /// Schedule the next tick one interval after now
    pub fn rearm(&mut self) {
        self.deadline = Instant::now() + self.interval;
    }
}

/// Run a session until the player quits.
///
/// Every applied event, tick or input, is followed by a full redraw. The
/// state is handed back for the exit summary.
pub fn run<S, K>(
    mut state: GameState,
    scheduler: &mut Scheduler<S>,
    renderer: &Renderer,
    sink: &mut K,
) -> io::Result<GameState>
where
    S: EventSource,
    K: FrameSink,
{
    sink.present(&renderer.frame_lines(&state))?;

    loop {
        match scheduler.next_event()? {
            Event::Tick => {
                tick(&mut state);
                sink.present(&renderer.frame_lines(&state))?;
                scheduler.rearm();
            }
            Event::Input(command) => {
                if apply(&mut state, command) == Flow::Quit {
                    log::info!("Quit after {} ticks", state.time_ticks);
                    return Ok(state);
                }
                sink.present(&renderer.frame_lines(&state))?;
            }
        }
    }
}
