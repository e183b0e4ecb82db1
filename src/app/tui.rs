//! Terminal management system
//!
//! Handles crossterm backend initialization, alternate screen handling,
//! and keyboard event polling for the TUI application.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Minimum terminal width for the cards to render
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height for the cards to render
pub const MIN_HEIGHT: u16 = 12;

/// Terminal wrapper that manages the backend and screen state
pub struct Tui<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    active: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()), tick_rate)
    }
}

impl<B: Backend> Tui<B> {
    /// Create a TUI over any ratatui backend
    pub fn with_backend(backend: B, tick_rate: Duration) -> io::Result<Self> {
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: false,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // Raw mode is on from here; restore() must undo it even if the rest fails
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Whether raw mode is currently enabled by this instance
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait up to one tick for a key press
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            // Windows reports both press and release
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, widgets::Paragraph};

    fn test_tui(tick_rate: Duration) -> Tui<TestBackend> {
        Tui::with_backend(TestBackend::new(40, 12), tick_rate).unwrap()
    }

    #[test]
    fn test_tui_creation() {
        let tui = test_tui(Duration::from_millis(250));
        assert!(!tui.is_active());
    }

    #[test]
    fn test_tick_rate() {
        let tui = test_tui(Duration::from_millis(100));
        assert_eq!(tui.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_restore_without_init_is_noop() {
        let mut tui = test_tui(Duration::from_millis(250));
        assert!(tui.restore().is_ok());
        assert!(!tui.is_active());
    }

    #[test]
    fn test_draw_goes_to_backend() {
        let mut tui = test_tui(Duration::from_millis(250));
        tui.draw(|f| f.render_widget(Paragraph::new("hello"), f.size()))
            .unwrap();
        let cell = tui.terminal.backend().buffer().get(0, 0).symbol().to_string();
        assert_eq!(cell, "h");
    }
}
