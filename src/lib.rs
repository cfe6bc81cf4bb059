//! arbeitskal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ics;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; a broken config file degrades to defaults.
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::messages::warning(format!(
                "Konfiguration nicht lesbar ({e}), Standardwerte werden verwendet."
            ));
            Config::default()
        }
    };

    // CLI overrides
    if let Some(custom_file) = &cli.file {
        cfg.calendar_file = custom_file.clone();
    }
    if let Some(offset) = cli.offset {
        cfg.utc_offset_hours = offset;
    }

    let path = utils::path::expand_tilde(&cfg.calendar_file);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    core::session::run_session(&mut stdin.lock(), &mut stdout.lock(), &cfg, &path)
}
