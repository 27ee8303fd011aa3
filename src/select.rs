//! The select widget state machine.
//!
//! [`Select`] owns the open/closed state, the selection, the search text and the
//! keyboard focus. Every mutation of the selection is reported synchronously to the
//! host through the [`OnChange`] callback, after the state has been updated.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filter::filter_options;
use crate::item::{OptionPool, SelectOption};
use crate::options::SelectOptions;
use crate::selection::Selection;
use crate::theme::ColorTheme;
use crate::tui::event::Action;
use crate::tui::widget::HitRegion;

/// Selection reported to the host on every change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selected {
    /// Single mode: the selected option, if any
    Single(Option<SelectOption>),
    /// Multi mode: every selected option, in selection order
    Multi(Vec<SelectOption>),
}

impl Selected {
    /// Values of the selected options, in selection order
    pub fn values(&self) -> Vec<&str> {
        match self {
            Selected::Single(opt) => opt.iter().map(|o| o.value.as_str()).collect(),
            Selected::Multi(opts) => opts.iter().map(|o| o.value.as_str()).collect(),
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        match self {
            Selected::Single(opt) => opt.is_none(),
            Selected::Multi(opts) => opts.is_empty(),
        }
    }
}

type OnChangeFn = dyn FnMut(&Selected);

/// Change notification callback
pub struct OnChange(Box<OnChangeFn>);

impl std::fmt::Debug for OnChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnChange").finish()
    }
}

impl OnChange {
    /// Wraps a closure called with the new selection
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&Selected) + 'static,
    {
        Self(Box::new(f))
    }

    fn call(&mut self, selected: &Selected) {
        (self.0)(selected)
    }
}

/// A searchable single or multi select
#[derive(derive_more::Debug)]
pub struct Select {
    pub(crate) pool: OptionPool,
    pub(crate) options: SelectOptions,
    pub(crate) selection: Selection,
    pub(crate) query: String,
    pub(crate) open: bool,
    pub(crate) focused: usize,
    pub(crate) on_change: Option<OnChange>,
    #[debug(skip)]
    pub(crate) theme: ColorTheme,
    #[debug(skip)]
    pub(crate) hits: Vec<HitRegion>,
}

impl Select {
    /// Creates a closed widget with nothing selected
    pub fn new(pool: impl Into<OptionPool>, options: SelectOptions) -> Self {
        let theme = ColorTheme::init_from_options(&options);
        Self {
            pool: pool.into(),
            options,
            selection: Selection::default(),
            query: String::new(),
            open: false,
            focused: 0,
            on_change: None,
            theme,
            hits: Vec::new(),
        }
    }

    /// Sets the change callback
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Selected) + 'static,
    {
        self.on_change = Some(OnChange::new(f));
        self
    }

    /// The candidate options
    pub fn pool(&self) -> &OptionPool {
        &self.pool
    }

    /// Current configuration
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current search text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the option list is shown
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Focus index, clamped to the options currently visible
    pub fn focused(&self) -> usize {
        self.focused.min(self.filtered_options().len().saturating_sub(1))
    }

    /// The selection in the shape the host receives it
    pub fn selected(&self) -> Selected {
        if self.options.multi {
            Selected::Multi(self.selection.to_vec())
        } else {
            Selected::Single(self.selection.first().cloned())
        }
    }

    /// Options currently visible, in pool order
    ///
    /// Recomputed on every call from the pool, the selection and the search text.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        filter_options(&self.pool, &self.selection, &self.query)
    }

    /// The visible option under the keyboard focus
    pub fn focused_option(&self) -> Option<&SelectOption> {
        self.filtered_options().get(self.focused()).copied()
    }

    /// Text shown in the input field
    ///
    /// In single mode an empty search shows the selected label instead.
    pub fn display_value(&self) -> &str {
        if !self.options.multi && self.query.is_empty() {
            self.selection.first().map(|opt| opt.label.as_str()).unwrap_or_default()
        } else {
            &self.query
        }
    }

    /// Placeholder to show, only while nothing is selected
    pub fn placeholder(&self) -> Option<&str> {
        self.selection.is_empty().then_some(self.options.placeholder.as_str())
    }

    /// Whether the clear-all affordance is available
    pub fn show_clear(&self) -> bool {
        self.options.clearable && !self.selection.is_empty()
    }

    fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.focused = 0;
        }
        if open != self.open {
            debug!("dropdown {}", if open { "opened" } else { "closed" });
        }
        self.open = open;
    }

    fn notify(&mut self) {
        let selected = self.selected();
        debug!("selection changed: {:?}", selected.values());
        if let Some(cb) = self.on_change.as_mut() {
            cb.call(&selected);
        }
    }

    /// Opens or closes the option list
    pub fn toggle_open(&mut self) {
        self.set_open(!self.open);
    }

    /// Opens the option list
    pub fn open(&mut self) {
        self.set_open(true);
    }

    /// Closes the option list
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Picks an option
    ///
    /// Disabled options are ignored. In single mode the option replaces the selection,
    /// or clears it if it was the selected one, and the list closes. In multi mode the
    /// option is toggled and the list stays open.
    pub fn select_option(&mut self, opt: &SelectOption) {
        if opt.disabled {
            trace!("ignoring disabled option {}", opt.value);
            return;
        }
        if self.options.multi {
            self.selection.toggle(opt);
        } else {
            if self.selection.contains(&opt.value) {
                self.selection.clear();
            } else {
                self.selection.replace(opt.clone());
            }
            self.set_open(false);
        }
        self.notify();
    }

    /// Picks the pool option with this value, if there is one
    pub fn select_value(&mut self, value: &str) {
        if let Some(opt) = self.pool.get(value).cloned() {
            self.select_option(&opt);
        }
    }

    /// Replaces the search text, opening the list if needed
    pub fn update_search(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.set_open(true);
    }

    /// Deselects an option
    ///
    /// Options that are not selected are left alone and nothing is reported.
    pub fn remove_selected(&mut self, opt: &SelectOption) {
        if self.selection.remove(&opt.value).is_some() {
            self.notify();
        }
    }

    /// Empties the selection, if the widget is clearable and something is selected
    pub fn clear_all(&mut self) {
        if !self.show_clear() {
            return;
        }
        self.selection.clear();
        self.notify();
    }

    /// Backspace: drops the last search character, or with an empty search the most
    /// recent selection
    pub fn backspace(&mut self) {
        if self.query.is_empty() {
            if self.selection.pop().is_some() {
                self.notify();
            }
        } else {
            let mut query = std::mem::take(&mut self.query);
            query.pop();
            self.update_search(query);
        }
    }

    /// Moves the focus to the next visible option
    pub fn focus_next(&mut self) {
        let len = self.filtered_options().len();
        self.focused = self.focused();
        if self.focused + 1 < len {
            self.focused += 1;
        }
    }

    /// Moves the focus to the previous visible option
    pub fn focus_previous(&mut self) {
        self.focused = self.focused().saturating_sub(1);
    }

    /// Enter: picks the focused option, then moves the focus back to the top
    pub fn accept(&mut self) {
        let Some(opt) = self.focused_option().cloned() else {
            return;
        };
        self.select_option(&opt);
        self.focused = 0;
    }

    /// Replaces the configuration
    ///
    /// Going from multi to single keeps only the first selected option. This does not
    /// count as a selection change and is not reported.
    pub fn set_options(&mut self, options: SelectOptions) {
        if !options.multi && self.selection.len() > 1 {
            debug!("single mode: keeping only the first of {} selections", self.selection.len());
            self.selection.truncate(1);
        }
        if options.color != self.options.color {
            self.theme = ColorTheme::init_from_options(&options);
        }
        self.options = options;
    }

    /// Actions bound to a key
    ///
    /// Unbound printable characters are typed into the search field.
    pub fn actions_for_key(&self, key: &KeyEvent) -> Vec<Action> {
        if let Some(actions) = self.options.keymap.get(key) {
            return actions.clone();
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE) => vec![Action::AddChar(c)],
            (KeyCode::Char(c), KeyModifiers::SHIFT) => vec![Action::AddChar(c.to_uppercase().next().unwrap_or(c))],
            _ => vec![],
        }
    }

    /// Runs every action bound to a key and returns them
    pub fn handle_key(&mut self, key: &KeyEvent) -> Vec<Action> {
        debug!("key event: {:?}", key);
        let actions = self.actions_for_key(key);
        for act in &actions {
            self.handle_action(act);
        }
        actions
    }

    /// Runs a single action
    pub fn handle_action(&mut self, act: &Action) {
        use Action::*;
        match act {
            Accept => self.accept(),
            AddChar(c) => {
                let mut query = self.query.clone();
                query.push(*c);
                self.update_search(query);
            }
            BackwardDeleteChar => self.backspace(),
            ClearAll => self.clear_all(),
            Close => self.close(),
            Down => self.focus_next(),
            Open => self.open(),
            Remove(value) => {
                if let Some(opt) = self.selection.get(value).cloned() {
                    self.remove_selected(&opt);
                }
            }
            Select(value) => self.select_value(value),
            SetQuery(text) => self.update_search(text.clone()),
            ToggleClearable => {
                let mut options = self.options.clone();
                options.clearable = !options.clearable;
                self.set_options(options);
            }
            ToggleMulti => {
                let mut options = self.options.clone();
                options.multi = !options.multi;
                self.set_options(options);
            }
            ToggleOpen => self.toggle_open(),
            Up => self.focus_previous(),
            Abort | Ignore => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SelectOptionsBuilder;

    fn pool() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta"),
            SelectOption::new("c", "Gamma").disabled(),
        ]
    }

    #[test]
    fn opening_resets_focus() {
        let mut s = Select::new(pool(), SelectOptions::default());
        s.open();
        s.focus_next();
        assert_eq!(s.focused(), 1);
        s.close();
        assert_eq!(s.focused, 1);
        s.toggle_open();
        assert_eq!(s.focused(), 0);
    }

    #[test]
    fn focus_is_clamped_to_visible_options() {
        let mut s = Select::new(pool(), SelectOptions::default());
        s.open();
        s.focus_next();
        s.focus_next();
        assert_eq!(s.focused(), 2);
        s.update_search("beta");
        assert_eq!(s.focused(), 0);
        assert_eq!(s.focused_option().map(|o| o.value.as_str()), Some("b"));
    }

    #[test]
    fn display_value_in_single_mode() {
        let mut s = Select::new(pool(), SelectOptions::default());
        assert_eq!(s.display_value(), "");
        assert_eq!(s.placeholder(), Some("Select..."));
        s.select_value("b");
        assert_eq!(s.display_value(), "Beta");
        assert_eq!(s.placeholder(), None);
        s.update_search("al");
        assert_eq!(s.display_value(), "al");
    }

    #[test]
    fn display_value_in_multi_mode() {
        let opts = SelectOptionsBuilder::default().multi(true).build().unwrap();
        let mut s = Select::new(pool(), opts);
        s.select_value("b");
        assert_eq!(s.display_value(), "");
    }

    #[test]
    fn backspace_edits_the_query_first() {
        let mut s = Select::new(pool(), SelectOptions::default());
        s.select_value("a");
        s.update_search("be");
        s.backspace();
        assert_eq!(s.query(), "b");
        s.backspace();
        assert_eq!(s.query(), "");
        assert_eq!(s.selection().len(), 1);
        s.backspace();
        assert!(s.selection().is_empty());
    }

    #[test]
    fn shift_chars_are_typed_uppercase() {
        let mut s = Select::new(pool(), SelectOptions::default());
        s.handle_key(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::SHIFT));
        assert_eq!(s.query(), "B");
        assert!(s.is_open());
    }

    #[test]
    fn changing_color_reloads_the_theme() {
        let mut s = Select::new(pool(), SelectOptionsBuilder::default().color(Some(String::from("dark"))).build().unwrap());
        assert_eq!(s.theme, ColorTheme::from_options("dark"));
        let light = SelectOptionsBuilder::default().color(Some(String::from("light"))).build().unwrap();
        s.set_options(light);
        assert_eq!(s.theme, ColorTheme::from_options("light"));
        assert_ne!(s.theme, ColorTheme::from_options("dark"));
    }

    #[test]
    fn remove_action_deselects_by_value() {
        let opts = SelectOptionsBuilder::default().multi(true).build().unwrap();
        let mut s = Select::new(pool(), opts);
        s.select_value("a");
        s.select_value("b");
        s.handle_action(&Action::Remove("a".into()));
        assert_eq!(s.selected(), Selected::Multi(vec![SelectOption::new("b", "Beta")]));
    }
}
