//! Dropdown is a searchable select widget for terminal UIs.
//!
//! The core is [`Select`], a state machine that owns the open/closed state, the
//! selection, the search text and the keyboard focus. It works in single or multi
//! selection mode, filters options case-insensitively as the user types, supports
//! keyboard navigation and an optional clear-all. Every selection change is reported
//! synchronously through a callback. The [`tui`] module renders it with ratatui.
//!
//! # Examples
//!
//! ```
//! use dropdown::prelude::*;
//!
//! let options = SelectOptionsBuilder::default()
//!     .multi(true)
//!     .clearable(true)
//!     .build()
//!     .unwrap();
//!
//! let pool = OptionPool::new(vec![
//!     SelectOption::new("chocolate", "Chocolate"),
//!     SelectOption::new("vanilla", "Vanilla"),
//!     SelectOption::new("blueberry", "Blueberry").disabled(),
//! ])
//! .unwrap();
//!
//! let mut select = Select::new(pool, options).on_change(|selected| println!("{:?}", selected.values()));
//! select.update_search("van");
//! select.accept();
//! assert_eq!(select.selected().values(), ["vanilla"]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use color_eyre::eyre;

pub use crate::error::{Error, Result};
pub use crate::item::{OptionPool, SelectOption};
pub use crate::options::{SelectOptions, SelectOptionsBuilder};
pub use crate::select::{OnChange, Select, Selected};
pub use crate::selection::Selection;
use crate::tui::{App, Event, Tui};

pub mod binds;
mod error;
pub mod filter;
pub mod item;
pub mod options;
pub mod prelude;
pub mod select;
pub mod selection;
pub mod theme;
pub mod tui;

/// Runs the select widget in the terminal until the user quits
///
/// Draws on stderr and returns the final selection.
pub fn run_with(pool: OptionPool, options: SelectOptions) -> eyre::Result<Selected> {
    let mut tui = Tui::stderr()?;
    tui.enter()?;
    let mut app = App::new(pool, options);
    app.handle_event(&mut tui, &Event::Render)?;
    while !app.should_quit {
        let event = tui.next_event()?;
        app.handle_event(&mut tui, &event)?;
        app.handle_event(&mut tui, &Event::Render)?;
    }
    tui.exit()?;
    debug!("{} change notifications", app.changes.borrow().len());
    Ok(app.select.selected())
}
