//! Terminal session for the marketplace UI
//!
//! Owns the raw-mode terminal and turns crossterm events into [`Input`].
//! A poll that times out yields [`Input::Tick`], which also drives image
//! loading, so the tick rate bounds how fast thumbnails appear.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Input the app loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

impl Input {
    /// `None` for events the UI ignores: key releases/repeats, focus, paste
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Input::Key(key)),
            Event::Mouse(mouse) => Some(Input::Mouse(mouse)),
            Event::Resize(w, h) => Some(Input::Resize(w, h)),
            _ => None,
        }
    }
}

pub struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick: Duration,
    active: bool,
}

impl Session {
    /// Switch to the alternate screen in raw mode with mouse capture
    pub fn start(tick: Duration) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut session = Self {
            terminal,
            tick,
            active: false,
        };
        session.activate()?;
        Ok(session)
    }

    fn activate(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        self.active = true;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the shell's terminal. Safe to call twice; Drop calls it too.
    pub fn finish(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, cursor::Show)?;
        Ok(())
    }

    /// Block for at most one tick. An ignored event counts as a tick.
    pub fn next_input(&self) -> Result<Input> {
        if !event::poll(self.tick)? {
            return Ok(Input::Tick);
        }
        let raw = event::read()?;
        Ok(Input::from_event(raw).unwrap_or(Input::Tick))
    }

    pub fn render<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
