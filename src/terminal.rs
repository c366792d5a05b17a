//! Raw-mode terminal ownership.

use crossterm::{cursor, event, execute, terminal};
use std::io::{self, Write};
use tracing::info;

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture, and restores it when dropped.
pub struct TerminalGuard {
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        info!("terminal raw mode enabled");
        let mut guard = TerminalGuard {
            alternate_screen: false,
            mouse_capture: false,
        };
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        guard.alternate_screen = true;
        execute!(stdout, event::EnableMouseCapture)?;
        guard.mouse_capture = true;
        Ok(guard)
    }

    /// Current terminal size as (columns, rows)
    pub fn size(&self) -> io::Result<(u16, u16)> {
        match termsize::get() {
            Some(size) => Ok((size.cols, size.rows)),
            None => terminal::size(),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        // Best effort: the terminal may already be gone
        if self.mouse_capture {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        if self.alternate_screen {
            let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
        info!("terminal restored");
    }
}
