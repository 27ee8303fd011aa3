use std::io::Write;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dropdown::prelude::*;
use dropdown::{Error, binds::KeyMap};
use tempfile::NamedTempFile;

fn write_options(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn options_file_is_read_in_order() -> Result<()> {
    let file = write_options(
        r#"[
            (value: "ny", label: "New York"),
            (value: "sf", label: "San Francisco", disabled: true),
            (value: "la", label: "Los Angeles"),
        ]"#,
    )?;
    let pool = OptionPool::from_file(file.path())?;
    let values: Vec<_> = pool.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["ny", "sf", "la"]);
    assert!(pool.get("sf").is_some_and(|o| o.disabled));
    assert!(pool.get("la").is_some_and(|o| !o.disabled));
    Ok(())
}

#[test]
fn duplicate_values_are_rejected() -> Result<()> {
    let file = write_options(r#"[(value: "a", label: "A"), (value: "a", label: "Again")]"#)?;
    let err = OptionPool::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::DuplicateValue(v) if v == "a"));
    Ok(())
}

#[test]
fn malformed_files_are_reported() -> Result<()> {
    let file = write_options("[(value: \"a\"")?;
    assert!(matches!(OptionPool::from_file(file.path()), Err(Error::OptionsFile(_))));
    assert!(matches!(
        OptionPool::from_file("/nonexistent/dropdown/options.ron"),
        Err(Error::Io(_))
    ));
    Ok(())
}

#[test]
fn keymap_from_str_keeps_defaults() {
    let map = KeyMap::from("alt-j:down,ctrl-u:close");
    assert_eq!(
        map.get(&KeyEvent::new(KeyCode::Char('j'), KeyModifiers::ALT)),
        Some(&vec![Action::Down])
    );
    assert_eq!(
        map.get(&KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        Some(&vec![Action::Close])
    );
    assert_eq!(
        map.get(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
        Some(&vec![Action::Up])
    );
}

#[cfg(feature = "cli")]
mod cli {
    use clap::Parser;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use dropdown::prelude::*;

    fn parse(args: &[&str]) -> SelectOptions {
        SelectOptions::parse_from(std::iter::once("dropdown").chain(args.iter().copied())).build()
    }

    #[test]
    fn defaults() {
        let opts = parse(&[]);
        assert!(!opts.multi);
        assert!(!opts.clearable);
        assert_eq!(opts.no_results_message, "No results found");
        assert_eq!(opts.placeholder, "Select...");
        assert!(opts.options_file.is_none());
        assert!(opts.color.is_none());
    }

    #[test]
    fn flags() {
        let opts = parse(&[
            "-m",
            "--clearable",
            "--placeholder",
            "Pick a city",
            "--no-results-message=Nothing",
            "-o",
            "cities.ron",
            "--color=bw",
        ]);
        assert!(opts.multi);
        assert!(opts.clearable);
        assert_eq!(opts.placeholder, "Pick a city");
        assert_eq!(opts.no_results_message, "Nothing");
        assert_eq!(opts.options_file.as_deref(), Some(std::path::Path::new("cities.ron")));
        assert_eq!(opts.color.as_deref(), Some("bw"));
    }

    #[test]
    fn repeated_binds_accumulate() {
        let opts = parse(&["--bind", "tab:down", "-b", "btab:up,ctrl-x:clear-all+close"]);
        assert_eq!(
            opts.keymap.get(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(&vec![Action::Down])
        );
        assert_eq!(
            opts.keymap.get(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)),
            Some(&vec![Action::Up])
        );
        assert_eq!(
            opts.keymap.get(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(&vec![Action::ClearAll, Action::Close])
        );
    }

    #[test]
    fn later_flags_override_earlier_ones() {
        let opts = parse(&["--placeholder", "one", "--placeholder", "two"]);
        assert_eq!(opts.placeholder, "two");
    }
}
