//! Terminal UI components and rendering.
//!
//! This module renders a [`Select`](crate::Select) with ratatui, maps mouse clicks
//! back onto it, and hosts the demo application and its terminal lifecycle.

pub use app::App;
pub use backend::Tui;
pub use event::Event;
pub use widget::{HitRegion, HitTarget, SelectRender};

/// Demo application state
pub mod app;
mod backend;
/// Event handling and action definitions
pub mod event;
/// Rendering and hit-testing of the select widget
pub mod widget;
