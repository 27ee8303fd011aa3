use std::cell::RefCell;
use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Backend;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::Event;
use super::Tui;
use super::event::Action;
use super::widget::SelectRender;
use crate::item::{OptionPool, SelectOption};
use crate::options::SelectOptions;
use crate::select::{Select, Selected};

const SINGLE_WIDTH: u16 = 36;
const MULTI_WIDTH: u16 = 72;

/// The pool used when no options file is given
pub fn flavours() -> OptionPool {
    [
        SelectOption::new("chocolate", "Chocolate"),
        SelectOption::new("strawberry", "Strawberry"),
        SelectOption::new("vanilla", "Vanilla"),
        SelectOption::new("mint", "Mint"),
        SelectOption::new("caramel", "Caramel"),
        SelectOption::new("hazelnut", "Hazelnut"),
        SelectOption::new("banana", "Banana"),
        SelectOption::new("blueberry", "Blueberry").disabled(),
        SelectOption::new("peanut_butter", "Peanut Butter"),
        SelectOption::new("mango", "Mango"),
    ]
    .into_iter()
    .collect()
}

/// Demo application: one select widget plus the switches to flip its configuration
pub struct App {
    /// The widget
    pub select: Select,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Every change notification received, oldest first
    pub changes: Rc<RefCell<Vec<Selected>>>,
}

impl App {
    /// Creates the application and hooks the change log onto the widget
    pub fn new(pool: OptionPool, options: SelectOptions) -> Self {
        let changes: Rc<RefCell<Vec<Selected>>> = Rc::default();
        let log = changes.clone();
        let select = Select::new(pool, options).on_change(move |selected| {
            info!("onChange: {:?}", selected.values());
            log.borrow_mut().push(selected.clone());
        });
        Self {
            select,
            should_quit: false,
            changes,
        }
    }

    /// The last change notification, if any
    pub fn last_change(&self) -> Option<Selected> {
        self.changes.borrow().last().cloned()
    }

    /// Handles one event
    pub fn handle_event<B: Backend>(&mut self, tui: &mut Tui<B>, event: &Event) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        match event {
            Event::Render => {
                tui.draw(|f| {
                    let render = self.render_app(f.area(), f.buffer_mut());
                    f.set_cursor_position(render.cursor);
                })?;
            }
            Event::Resize => {
                tui.clear()?;
            }
            Event::Quit => {
                self.should_quit = true;
            }
            Event::Key(key) => {
                for act in self.select.actions_for_key(key) {
                    self.handle_action(&act);
                }
            }
            Event::Mouse(mouse) => {
                self.select.handle_mouse(mouse);
            }
            Event::Action(act) => {
                self.handle_action(act);
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, act: &Action) {
        match act {
            Action::Abort => self.should_quit = true,
            Action::Close if !self.select.is_open() => self.should_quit = true,
            act => self.select.handle_action(act),
        }
    }

    fn render_app(&mut self, area: Rect, buf: &mut Buffer) -> SelectRender {
        let opts = self.select.options();
        let switch = |on: bool| if on { "on" } else { "off" };
        let help = Line::from(vec![
            Span::raw(format!("F2 multi: {}", switch(opts.multi))),
            Span::raw("  "),
            Span::raw(format!("F3 clearable: {}", switch(opts.clearable))),
            Span::raw("  "),
            Span::raw("ctrl-c quit"),
        ]);
        let width = if opts.multi { MULTI_WIDTH } else { SINGLE_WIDTH };
        buf.set_line(area.x, area.y, &help, area.width);

        let select_area = Rect::new(
            area.x,
            area.y + 2,
            width.min(area.width),
            area.height.saturating_sub(2),
        );
        self.select.render_select(select_area, buf)
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_app(area, buf);
    }
}
