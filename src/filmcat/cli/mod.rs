//! Terminal front end: argument parsing, logging setup, the interactive menu
//! loop and table rendering. This is the only layer that touches stdin,
//! stdout or stderr.

pub mod menu;
pub mod print;
pub mod setup;
pub mod shell;

use crate::api::CatalogApi;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use clap::Parser;
use setup::{init_logging, Cli};
use shell::Shell;
use std::io::IsTerminal;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = CatalogConfig::load(&cwd)?;
    init_logging(cli.verbose, &config.log_level);

    let store = FileStore::new(config.data_path(&cwd));
    tracing::debug!(path = %store.path().display(), "opening catalog");

    // The single initial load. Failing here ends the process.
    let mut api = CatalogApi::open(store)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    // Color follows the terminal only; NO_COLOR/CLICOLOR_FORCE are not honored.
    colored::control::set_override(stdout.is_terminal());
    Shell::new(&mut api, stdin.lock(), stdout.lock()).run()
}
