//! cps-bundler - move built files back into their source tree
//!
//! Moves every file with the configured extension from the current directory
//! into the directory of the target tree where it belongs, remembering
//! destinations in a cache file. Can also print the tree's bundle index.

use clap::Parser;
use std::path::Path;

mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod index;
mod logging;
mod relocate;
mod ui;

use cli::Cli;
use config::Config;
use error::{Result, setup};
use ui::{ConsoleReporter, Report};

fn run(cli: &Cli, reporter: &mut ConsoleReporter) -> Result<()> {
    let working_dir = std::env::current_dir()
        .map_err(|e| setup::working_dir_unreadable(Path::new("."), e))?;
    let config = Config::from_cli(cli, &working_dir)?;

    if cli.index {
        let summary = commands::index::run(&config, reporter)?;
        println!("{summary}");
    } else {
        let summary = commands::relocate::run(&config, reporter)?;
        println!("{summary}");
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut reporter = ConsoleReporter;
    if let Err(e) = run(&cli, &mut reporter) {
        reporter.error(&e);
        std::process::exit(e.exit_code());
    }
}
