//! Key binding configuration and parsing.
//!
//! This module maps keyboard shortcuts to the actions a select widget understands,
//! and parses user overrides written as `key:action+action`.

use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::{Error, Result};
use crate::tui::event::{self, Action};

/// A map of key events to their associated actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap(pub HashMap<KeyEvent, Vec<Action>>);

impl Deref for KeyMap {
    type Target = HashMap<KeyEvent, Vec<Action>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for KeyMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<&str> for KeyMap {
    fn from(value: &str) -> Self {
        parse_keymaps(value.split(','))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        get_default_key_map()
    }
}

impl KeyMap {
    /// Adds keymaps from the source, skipping the ones that fail to parse
    pub fn add_keymaps<'a, T>(&mut self, source: T)
    where
        T: Iterator<Item = &'a str>,
    {
        for map in source {
            match parse_keymap(map) {
                Ok((key, action_chain)) => self
                    .bind(key, action_chain)
                    .unwrap_or_else(|err| debug!("Failed to bind key {map}: {err}")),
                Err(err) => debug!("Failed to parse keymap {map}: {err}"),
            }
        }
    }
    fn bind(&mut self, key: &str, action_chain: Vec<Action>) -> Result<()> {
        let key = parse_key(key)?;
        self.insert(key, action_chain);
        Ok(())
    }
}

/// Returns the default key bindings
#[rustfmt::skip]
pub fn get_default_key_map() -> KeyMap {
    let mut ret = HashMap::new();

    ret.insert(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), vec![Action::Down]);
    ret.insert(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), vec![Action::Up]);
    ret.insert(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), vec![Action::Accept]);
    ret.insert(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE), vec![Action::BackwardDeleteChar]);
    ret.insert(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), vec![Action::Close]);
    ret.insert(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE), vec![Action::ToggleMulti]);
    ret.insert(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE), vec![Action::ToggleClearable]);
    ret.insert(KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE), vec![Action::ToggleOpen]);

    ret.insert(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), vec![Action::Abort]);
    ret.insert(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL), vec![Action::Abort]);
    ret.insert(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL), vec![Action::BackwardDeleteChar]);
    ret.insert(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL), vec![Action::Down]);
    ret.insert(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL), vec![Action::ToggleOpen]);
    ret.insert(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL), vec![Action::Up]);
    ret.insert(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), vec![Action::ClearAll]);

    KeyMap(ret)
}

/// Parses a key str into a crossterm KeyEvent
pub fn parse_key(key: &str) -> Result<KeyEvent> {
    if key.is_empty() {
        return Err(Error::KeyParse(key.to_string()));
    }
    let parts = key.split('-').collect::<Vec<&str>>();
    let mut mods = KeyModifiers::NONE;

    if parts.len() > 1 {
        for mod_str in &parts[..parts.len() - 1] {
            mods |= match *mod_str {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(Error::KeyParse(key.to_string())),
            }
        }
    }
    let last = parts.last().copied().unwrap_or_default();

    let mut chars = last.chars();
    let keycode = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_uppercase() => {
            mods |= KeyModifiers::SHIFT;
            KeyCode::Char(c.to_lowercase().next().unwrap_or(c))
        }
        (Some(c), None) => KeyCode::Char(c),
        _ => match last.to_lowercase().as_str() {
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "bspace" | "bs" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "tab" => KeyCode::Tab,
            "btab" => KeyCode::BackTab,
            "esc" => KeyCode::Esc,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            s if s.starts_with('f') => {
                let index = s[1..].parse::<u8>().map_err(|_| Error::KeyParse(key.to_string()))?;
                KeyCode::F(index)
            }
            _ => return Err(Error::KeyParse(key.to_string())),
        },
    };

    Ok(KeyEvent::new(keycode, mods))
}

/// Parse an iterator of keymaps into a KeyMap, on top of the default one
pub fn parse_keymaps<'a, T>(maps: T) -> KeyMap
where
    T: Iterator<Item = &'a str>,
{
    let mut res = KeyMap::default();
    res.add_keymaps(maps);
    res
}

/// Parses an action chain, separated by '+'s into the corresponding actions
pub fn parse_action_chain(action_chain: &str) -> Result<Vec<Action>> {
    action_chain
        .split('+')
        .map(|s| event::parse_action(s).ok_or_else(|| Error::UnknownAction(s.to_string())))
        .collect()
}

/// Parse a single keymap and return the key and action(s)
pub fn parse_keymap(key_action: &str) -> Result<(&str, Vec<Action>)> {
    debug!("got key_action: {:?}", key_action);
    let (key, action_chain) = key_action
        .split_once(':')
        .ok_or_else(|| Error::KeyParse(key_action.to_string()))?;
    Ok((key, parse_action_chain(action_chain)?))
}
