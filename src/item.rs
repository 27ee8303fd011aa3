//! Options offered by the select widget and the pool holding them.

use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A selectable entry
///
/// `value` is the unique key of the option inside its pool, `label` is what gets
/// displayed and matched against the search text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique key
    pub value: String,
    /// Display text
    pub label: String,
    /// Disabled options are listed but can never be selected
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Ordered, immutable list of options supplied by the host
///
/// All values must be unique. [`OptionPool::new`] checks it, the `From` conversions
/// trust the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionPool(Vec<SelectOption>);

impl OptionPool {
    /// Builds a pool, rejecting duplicate values
    pub fn new(options: Vec<SelectOption>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for opt in &options {
            if !seen.insert(opt.value.as_str()) {
                return Err(Error::DuplicateValue(opt.value.clone()));
            }
        }
        Ok(Self(options))
    }

    /// Reads a pool from a RON file containing a list of options
    ///
    /// ```ron
    /// [
    ///     (value: "chocolate", label: "Chocolate"),
    ///     (value: "blueberry", label: "Blueberry", disabled: true),
    /// ]
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let options: Vec<SelectOption> = ron::from_str(&content)?;
        debug!("Read {} options from {}", options.len(), path.as_ref().display());
        Self::new(options)
    }

    /// Looks up an option by its value
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.0.iter().find(|opt| opt.value == value)
    }
}

impl Deref for OptionPool {
    type Target = [SelectOption];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<SelectOption>> for OptionPool {
    fn from(options: Vec<SelectOption>) -> Self {
        Self(options)
    }
}

impl FromIterator<SelectOption> for OptionPool {
    fn from_iter<T: IntoIterator<Item = SelectOption>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
