//! Convenience re-exports of commonly used types.
//!
//! `use dropdown::prelude::*;` brings the widget, its configuration and the option
//! types into scope.

pub use crate::item::{OptionPool, SelectOption};
pub use crate::options::{SelectOptions, SelectOptionsBuilder};
pub use crate::select::{OnChange, Select, Selected};
pub use crate::selection::Selection;
pub use crate::tui::{App, Event, Tui, event::Action};
