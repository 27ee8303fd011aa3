#[macro_use]
extern crate log;

use std::env;

use clap::Parser;
use color_eyre::eyre::Result;
use dropdown::prelude::*;
use dropdown::tui::app::flavours;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        warn!("could not install the error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> SelectOptions {
    let mut args = Vec::new();

    args.push(
        env::args()
            .next()
            .expect("there should be at least one arg: the application name"),
    );
    args.extend(
        env::var("DROPDOWN_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    SelectOptions::parse_from(args).build()
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    let pool = match &opts.options_file {
        Some(path) => OptionPool::from_file(path)?,
        None => flavours(),
    };
    debug!("starting with {} options, multi: {}", pool.len(), opts.multi);

    let selected = dropdown::run_with(pool, opts)?;
    if selected.is_empty() {
        return Ok(1);
    }
    for value in selected.values() {
        println!("{value}");
    }
    Ok(0)
}
