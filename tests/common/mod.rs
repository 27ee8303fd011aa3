use std::cell::RefCell;
use std::rc::Rc;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dropdown::prelude::*;
use dropdown::tui::app::flavours;
use ratatui::backend::TestBackend;

/// A test harness driving the demo [`App`] on a [`TestBackend`].
///
/// Every input is followed by a render, like the real event loop, so hit regions
/// and the screen are always up to date.
pub struct TestHarness {
    pub app: App,
    pub tui: Tui<TestBackend>,
}

impl TestHarness {
    pub fn new(options: SelectOptions) -> Result<Self> {
        Self::with_pool(flavours(), options, 80, 16)
    }

    pub fn with_pool(pool: OptionPool, options: SelectOptions, width: u16, height: u16) -> Result<Self> {
        let mut h = Self {
            app: App::new(pool, options),
            tui: Tui::new(TestBackend::new(width, height))?,
        };
        h.render()?;
        Ok(h)
    }

    pub fn send(&mut self, event: Event) -> Result<()> {
        self.app.handle_event(&mut self.tui, &event)?;
        self.render()
    }

    pub fn render(&mut self) -> Result<()> {
        self.app.handle_event(&mut self.tui, &Event::Render)
    }

    pub fn key(&mut self, code: KeyCode) -> Result<()> {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn ctrl(&mut self, c: char) -> Result<()> {
        self.send(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
    }

    pub fn type_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars() {
            self.key(KeyCode::Char(c))?;
        }
        Ok(())
    }

    pub fn click(&mut self, x: u16, y: u16) -> Result<()> {
        self.send(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Clicks the first occurrence of `needle` on screen
    pub fn click_text(&mut self, needle: &str) -> Result<()> {
        let (x, y) = self
            .find(needle)
            .ok_or_else(|| color_eyre::eyre::eyre!("'{needle}' not on screen:\n{}", self.screen()))?;
        self.click(x, y)
    }

    pub fn select(&self) -> &Select {
        &self.app.select
    }

    pub fn changes(&self) -> Vec<Selected> {
        self.app.changes.borrow().clone()
    }

    /// Screen content, one string per row, trailing spaces removed
    pub fn lines(&self) -> Vec<String> {
        let buf = self.tui.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    pub fn screen(&self) -> String {
        let mut lines = self.lines();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Position of the first occurrence of `needle` on screen
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        self.lines().iter().enumerate().find_map(|(y, line)| {
            line.find(needle)
                .map(|byte| (line[..byte].chars().count() as u16, y as u16))
        })
    }
}

/// Collects every change notification of a widget
pub fn recorder() -> (Rc<RefCell<Vec<Selected>>>, impl FnMut(&Selected) + 'static) {
    let log: Rc<RefCell<Vec<Selected>>> = Rc::default();
    let sink = log.clone();
    (log, move |selected: &Selected| sink.borrow_mut().push(selected.clone()))
}

pub fn opt(value: &str) -> SelectOption {
    flavours()
        .get(value)
        .cloned()
        .unwrap_or_else(|| panic!("no flavour {value}"))
}
