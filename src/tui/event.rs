use crossterm::event::{KeyEvent, MouseEvent};

/// Events fed to the demo application
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Render the UI
    Render,
    /// A key was pressed
    Key(KeyEvent),
    /// A mouse event occurred
    Mouse(MouseEvent),
    /// The terminal was resized
    Resize,
    /// An action was triggered
    Action(Action),
}

/// Actions that can be performed on a select widget
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Quit the demo
    Abort,
    /// Select the focused option
    Accept,
    /// Append a character to the search text
    AddChar(char),
    /// Delete the last search character, or the last selection if the search is empty
    BackwardDeleteChar,
    /// Remove every selection (only when clearable)
    ClearAll,
    /// Close the dropdown
    Close,
    /// Focus the next visible option
    Down,
    /// Do nothing
    Ignore,
    /// Open the dropdown
    Open,
    /// Deselect the option with this value
    Remove(String),
    /// Select (or toggle) the option with this value
    Select(String),
    /// Replace the search text
    SetQuery(String),
    /// Flip clearable on and off
    ToggleClearable,
    /// Flip between single and multi selection
    ToggleMulti,
    /// Open or close the dropdown
    ToggleOpen,
    /// Focus the previous visible option
    Up,
}

/// Parses an action string into an Action enum
///
/// Actions taking an argument use `name:arg` or `name(arg)`.
pub fn parse_action(raw_action: &str) -> Option<Action> {
    use Action::*;

    let (action, arg) = match raw_action.split_once([':', '(']) {
        None => (raw_action, None),
        Some((act, "")) => (act, None),
        Some((act, a)) => (act, Some(a.trim_end_matches(')').to_string())),
    };
    debug!("parse_action: action={action}, arg={arg:?}");

    match action {
        "abort" => Some(Abort),
        "accept" => Some(Accept),
        "add-char" => arg.and_then(|a| a.chars().next()).map(AddChar),
        "backward-delete-char" => Some(BackwardDeleteChar),
        "clear-all" => Some(ClearAll),
        "close" => Some(Close),
        "down" => Some(Down),
        "ignore" => Some(Ignore),
        "open" => Some(Open),
        "remove" => arg.map(Remove),
        "select" => arg.map(Select),
        "set-query" => Some(SetQuery(arg.unwrap_or_default())),
        "toggle-clearable" => Some(ToggleClearable),
        "toggle-multi" => Some(ToggleMulti),
        "toggle-open" => Some(ToggleOpen),
        "up" => Some(Up),
        _ => None,
    }
}
