pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod system;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::config::{ColorMode, Settings};
use std::process::exit;

/// Exit status after the user pressed Ctrl-C.
const INTERRUPTED_EXIT: i32 = 130;

/// Run wtfpkg CLI entrypoint.
pub fn run_cli() {
    // 1. Signal Handling (the child sees the same SIGINT; remember it for the exit status)
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse, load settings & run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);

    let settings = match Settings::load(args.global.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui::init_colors(ColorMode::Auto);
            ui::error(&e.to_string());
            exit(e.exit_code());
        }
    };
    ui::init_colors(settings.color);

    let code = match cli::dispatcher::dispatch(&args, &settings) {
        Ok(code) => code,
        Err(e) => {
            ui::error(&e.to_string());
            e.exit_code()
        }
    };

    if ui::was_interrupted() {
        exit(INTERRUPTED_EXIT);
    }
    exit(code);
}
