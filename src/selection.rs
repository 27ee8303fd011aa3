//! Ordered set of selected options.

use indexmap::IndexMap;

use crate::item::SelectOption;

/// The current selection, keyed by option value
///
/// Iteration order is insertion order, which is the order the user picked things in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(IndexMap<String, SelectOption>);

impl Selection {
    /// Whether an option with this value is selected
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains_key(value)
    }

    /// The selected option with this value
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.0.get(value)
    }

    /// Adds the option at the end, unless it is already there
    pub fn push(&mut self, opt: SelectOption) {
        if !self.contains(&opt.value) {
            self.0.insert(opt.value.clone(), opt);
        }
    }

    /// Removes the option with the given value, keeping the order of the others
    pub fn remove(&mut self, value: &str) -> Option<SelectOption> {
        self.0.shift_remove(value)
    }

    /// Adds the option if absent, removes it otherwise
    pub fn toggle(&mut self, opt: &SelectOption) {
        if self.remove(&opt.value).is_none() {
            self.0.insert(opt.value.clone(), opt.clone());
        }
    }

    /// Replaces the whole selection with a single option
    pub fn replace(&mut self, opt: SelectOption) {
        self.0.clear();
        self.0.insert(opt.value.clone(), opt);
    }

    /// Removes the most recently added option
    pub fn pop(&mut self) -> Option<SelectOption> {
        self.0.pop().map(|(_, opt)| opt)
    }

    /// Keeps only the first `len` options
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Empties the selection
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The first selected option
    pub fn first(&self) -> Option<&SelectOption> {
        self.0.first().map(|(_, opt)| opt)
    }

    /// Selected options in selection order
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.0.values()
    }

    /// Number of selected options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned copy of the selected options, in order
    pub fn to_vec(&self) -> Vec<SelectOption> {
        self.iter().cloned().collect()
    }
}
