mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

pub use app::TuiApp;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

impl TuiApp {
    /// Run the event loop until the user quits.
    ///
    /// Blocks on keyboard input; the screen is redrawn after every event.
    pub fn run(mut self) -> Result<Self> {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::debug!("tui started");

        while !self.should_quit() {
            terminal.draw(|f| ui::draw(f, &mut self))?;

            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key);
            }
        }

        terminal.show_cursor()?;
        tracing::debug!("tui stopped");
        Ok(self)
    }
}
