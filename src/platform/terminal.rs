//! Crossterm-backed input and output
//!
//! Key events are read from the controlling terminal even when stdin is a
//! pipe, which is what lets piped text and live keys coexist.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use super::map_key;
use crate::scheduler::{EventSource, FrameSink};
use crate::sim::Command;

/// Keyboard input from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Control characters would move the cursor; draw them as one blank column.
fn printable(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Raw-mode screen. Restores the terminal when dropped.
pub struct TerminalScreen<W: Write = Stdout> {
    out: W,
    alternate: bool,
    raw: bool,
    rows_drawn: u16,
}

impl TerminalScreen<Stdout> {
    pub fn new(alternate: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::attach(io::stdout(), alternate, true)
    }
}

impl<W: Write> TerminalScreen<W> {
    /// Wrap `out` in a guard first, so a failed setup still restores it
    fn attach(out: W, alternate: bool, raw: bool) -> io::Result<Self> {
        let mut screen = Self {
            out,
            alternate: false,
            raw,
            rows_drawn: 0,
        };
        if alternate {
            screen.alternate = true;
            execute!(screen.out, EnterAlternateScreen)?;
        }
        execute!(
            screen.out,
            DisableLineWrap,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        log::debug!("Terminal ready (alternate screen: {})", alternate);
        Ok(screen)
    }
}

impl<W: Write> FrameSink for TerminalScreen<W> {
    fn present(&mut self, frame: &[String]) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        for (row, line) in frame.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                Print(printable(line)),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        queue!(
            self.out,
            terminal::Clear(ClearType::FromCursorDown),
            EndSynchronizedUpdate
        )?;
        self.rows_drawn = u16::try_from(frame.len()).unwrap_or(u16::MAX);
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalScreen<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, EnableLineWrap, cursor::Show);
        if self.alternate {
            let _ = execute!(self.out, LeaveAlternateScreen);
        } else {
            // Leave the last frame visible and continue below it
            let _ = execute!(self.out, cursor::MoveTo(0, self.rows_drawn));
        }
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Captures output; optionally fails the first flush
    #[derive(Default)]
    struct Capture {
        bytes: Vec<u8>,
        fail_first_flush: bool,
    }

    impl Write for &mut Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_first_flush {
                self.fail_first_flush = false;
                return Err(io::Error::other("terminal gone"));
            }
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.bytes).into_owned()
        }
    }

    #[test]
    fn test_printable_replaces_control_chars() {
        assert_eq!(printable("ab\r\tc\u{1b}"), "ab  c ");
        assert_eq!(printable("héllo |"), "héllo |");
    }

    #[test]
    fn test_present_never_writes_carriage_returns() {
        let mut capture = Capture::default();
        {
            let mut screen = TerminalScreen::attach(&mut capture, false, false).unwrap();
            screen
                .present(&["HELLO\r".to_string(), "\r\r".to_string()])
                .unwrap();
        }
        let text = capture.text();
        assert!(text.contains("HELLO "));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_failed_setup_restores_screen() {
        let mut capture = Capture {
            fail_first_flush: true,
            ..Default::default()
        };
        let result = TerminalScreen::attach(&mut capture, true, false);
        assert!(result.is_err());
        drop(result);

        let text = capture.text();
        // show cursor, then leave the alternate screen
        assert!(text.contains("\u{1b}[?25h"));
        assert!(text.contains("\u{1b}[?1049l"));
    }
}
