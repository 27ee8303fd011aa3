use std::io::Stderr;
use std::ops::{Deref, DerefMut};
use std::sync::Once;

use color_eyre::eyre::Result;
use crossterm::cursor;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Backend;

use super::Event;

static PANIC_HOOK_SET: Once = Once::new();

/// Terminal handle for the demo application
///
/// Events are read synchronously with [`Tui::next_event`]; there is no background task.
pub struct Tui<B: Backend = CrosstermBackend<Stderr>> {
    /// The ratatui terminal instance
    pub terminal: ratatui::Terminal<B>,
    entered: bool,
}

impl Tui {
    /// Creates a TUI drawing on stderr, so stdout stays free for the result
    pub fn stderr() -> Result<Self> {
        Self::new(CrosstermBackend::new(std::io::stderr()))
    }
}

impl<B: Backend> Tui<B>
where
    B::Error: Send + Sync + 'static,
{
    /// Creates a new TUI with the specified backend
    pub fn new(backend: B) -> Result<Self> {
        set_panic_hook();
        Ok(Self {
            terminal: ratatui::Terminal::new(backend)?,
            entered: false,
        })
    }
}

impl<B: Backend> Tui<B> {
    /// Enters the TUI by enabling raw mode, the alternate screen and mouse capture
    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stderr(), EnterAlternateScreen, EnableMouseCapture)?;
        self.entered = true;
        Ok(())
    }

    /// Restores the terminal
    pub fn exit(&mut self) -> Result<()> {
        if self.entered && crossterm::terminal::is_raw_mode_enabled()? {
            crossterm::execute!(
                std::io::stderr(),
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        self.entered = false;
        Ok(())
    }

    /// Blocks until the next event the application cares about
    pub fn next_event(&self) -> Result<Event> {
        loop {
            match crossterm::event::read()? {
                crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Event::Key(key)),
                crossterm::event::Event::Mouse(mouse) => return Ok(Event::Mouse(mouse)),
                crossterm::event::Event::Resize(_, _) => return Ok(Event::Resize),
                _ => (),
            }
        }
    }
}

impl<B: Backend> Deref for Tui<B> {
    type Target = ratatui::Terminal<B>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl<B: Backend> DerefMut for Tui<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            ratatui::restore(); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    });
}
