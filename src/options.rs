//! Configuration options for the select widget.
//!
//! This module provides the `SelectOptions` struct and builder. The same struct is the
//! command line of the demo binary when the `cli` feature is enabled.

use std::path::PathBuf;

use derive_builder::Builder;

use crate::binds::KeyMap;

/// dropdown - searchable select widget demo
///
/// Shows a select widget in the terminal and prints the selected values on exit.
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[builder(setter(into))]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "dropdown", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SelectOptions {
    //  --- Selection ---
    /// Allow selecting more than one option
    ///
    /// Can be flipped at runtime with F2.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Selection"))]
    pub multi: bool,

    /// Show a clear-all affordance when something is selected
    ///
    /// Can be flipped at runtime with F3.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Selection"))]
    pub clearable: bool,

    /// Read the options from a RON file
    ///
    /// The file holds a list of `(value: "..", label: "..", disabled: bool)` entries.
    /// Without it, a built-in list of ice-cream flavours is used.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Selection"))]
    pub options_file: Option<PathBuf>,

    //  --- Display ---
    /// Message shown when no option matches the search
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "No results found", help_heading = "Display")
    )]
    pub no_results_message: String,

    /// Text shown in the input while nothing is selected
    #[cfg_attr(feature = "cli", arg(long, default_value = "Select...", help_heading = "Display"))]
    pub placeholder: String,

    /// Color theme: dark, light, 16, bw or none
    ///
    /// Individual styles can be overridden with `name:color[+modifier]`, e.g.
    /// `--color=dark,focused:236,chip:110+bold`
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display", verbatim_doc_comment))]
    pub color: Option<String>,

    //  --- Interface ---
    /// Comma-separated list of binds to actions
    ///
    /// A key can be bound to a chain of actions separated by `+`:
    ///
    /// ```bash
    /// --bind 'tab:down,ctrl-x:clear-all+close'
    /// ```
    ///
    /// Actions: abort, accept, add-char:C, backward-delete-char, clear-all, close, down,
    /// ignore, open, remove:VALUE, select:VALUE, set-query:TEXT, toggle-clearable,
    /// toggle-multi, toggle-open, up
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Interface", verbatim_doc_comment))]
    pub bind: Vec<String>,

    /// The internal (parsed) keymap
    #[cfg_attr(feature = "cli", clap(skip))]
    pub keymap: KeyMap,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            multi: false,
            clearable: false,
            options_file: None,
            no_results_message: String::from("No results found"),
            placeholder: String::from("Select..."),
            color: None,
            bind: Vec::new(),
            keymap: KeyMap::default(),
        }
    }
}

impl SelectOptionsBuilder {
    /// Builds the SelectOptions from the builder
    pub fn build(&mut self) -> Result<SelectOptions, SelectOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl SelectOptions {
    /// Finalizes the options by parsing the key bindings
    pub fn build(mut self) -> Self {
        self.keymap = self.bind.iter().fold(KeyMap::default(), |mut res, part| {
            res.add_keymaps(part.split(','));
            res
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn builder_defaults() {
        let opts = SelectOptionsBuilder::default().build().unwrap();
        assert!(!opts.multi);
        assert!(!opts.clearable);
        assert_eq!(opts.no_results_message, "No results found");
        assert_eq!(opts.placeholder, "Select...");
    }

    #[test]
    fn builder_binds_are_parsed() {
        let opts = SelectOptionsBuilder::default()
            .multi(true)
            .no_results_message("No flavor found")
            .bind(vec![String::from("tab:down"), String::from("ctrl-x:clear-all,ctrl-y:close")])
            .build()
            .unwrap();
        assert!(opts.multi);
        assert_eq!(opts.no_results_message, "No flavor found");
        assert_eq!(
            opts.keymap.get(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(&vec![Action::Down])
        );
        assert_eq!(
            opts.keymap.get(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(&vec![Action::Close])
        );
    }
}
