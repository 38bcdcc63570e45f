use crate::config::ColorMode;
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Apply the color setting. `Auto` disables colors off a terminal or under `NO_COLOR`.
pub fn init_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
                colored::control::set_override(false);
            }
        }
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Diagnostic line for debug/verbose/test output.
///
/// Goes to stderr so routed stdout only carries package-manager output.
pub fn trace(msg: &str) {
    eprintln!("{} {}", "·".bright_black(), msg.dimmed());
}
