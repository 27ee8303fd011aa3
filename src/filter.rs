//! Derivation of the visible option list.

use crate::item::SelectOption;
use crate::selection::Selection;

/// Case-insensitive substring match of `query` against `label`
///
/// An empty query matches everything.
pub fn label_matches(label: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Options to display for the given search text
///
/// Keeps pool order, drops selected options and options whose label does not contain
/// `query`. Disabled options stay in the list, they just cannot be picked.
pub fn filter_options<'a>(pool: &'a [SelectOption], selection: &Selection, query: &str) -> Vec<&'a SelectOption> {
    let res: Vec<&SelectOption> = pool
        .iter()
        .filter(|opt| !selection.contains(&opt.value) && label_matches(&opt.label, query))
        .collect();
    trace!("filter '{}': {}/{} options", query, res.len(), pool.len());
    res
}
