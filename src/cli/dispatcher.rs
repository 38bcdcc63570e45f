//! Command dispatcher
//!
//! Turns parsed CLI flags and settings into a [`BackendConfig`], picks the
//! backend and hands the action to the package layer.

use crate::cli::args::{Cli, GlobalFlags};
use crate::config::{BackendConfig, Settings};
use crate::core::types::{Action, ActionRequest, Backend};
use crate::error::Result;
use crate::packages::PackageHandler;
use crate::ui;
use crate::utils::distro;

/// Dispatch the parsed CLI invocation and return the action's result code
pub fn dispatch(args: &Cli, settings: &Settings) -> Result<i32> {
    // Reject a bad action or argument count before touching the host.
    let action: Action = args.action.parse()?;
    ActionRequest::new(action, args.args.clone())?;

    let config = backend_config(&args.global, settings);
    let backend = resolve_backend(args.global.backend.as_deref(), settings)?;

    let verbose = config.is_verbose();
    if verbose {
        ui::info(&format!("Using {} backend", backend));
    }

    let handler = PackageHandler::new(backend, config);
    let code = handler.dispatch(&args.action, &args.args)?;

    if code == 0 && verbose {
        ui::success(&format!("{} finished", args.action));
    }
    Ok(code)
}

/// Merge CLI flags over settings. Boolean settings can only switch a flag on.
pub fn backend_config(flags: &GlobalFlags, settings: &Settings) -> BackendConfig {
    BackendConfig {
        debug: flags.debug,
        verbose: flags.verbose,
        refresh: flags.refresh || settings.refresh,
        quiet: flags.quiet,
        output: flags.output.clone().or_else(|| settings.output.clone()),
        names_only: flags.names_only || settings.names_only,
        test: flags.test,
    }
}

/// Backend from the command line, then settings, then host detection.
pub fn resolve_backend(flag: Option<&str>, settings: &Settings) -> Result<Backend> {
    if let Some(name) = flag {
        return name.parse();
    }
    if let Some(backend) = &settings.backend {
        return Ok(backend.clone());
    }
    distro::detect_backend()
}
