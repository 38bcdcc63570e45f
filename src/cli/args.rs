use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wtfpkg",
    about = "One set of package actions for pacman, apt, yum and dnf",
    long_about = "Run find, info, install, uninstall, list and file-owner lookups \
                  through whichever native package manager this host uses.\n\n\
                  Actions: file <path>, find|search <term>, info <pkg>, \
                  install <pkg>..., uninstall <pkg>..., list [pkg]",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// Action to perform (file, find, search, info, install, uninstall, list)
    pub action: String,

    /// Arguments for the action (packages, search term or file path)
    pub args: Vec<String>,
}

#[derive(Parser, Debug, Default)]
pub struct GlobalFlags {
    /// Debug output (repeat for more)
    #[arg(short = 'd', long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Refresh the package index before searching or installing
    #[arg(short = 'r', long)]
    pub refresh: bool,

    /// Quiet mode (with --output, list output goes only to the file)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Write list output to this file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// apt: match search terms against package names only
    #[arg(short = 'n', long)]
    pub names_only: bool,

    /// Diagnostic mode: trace instead of enforcing privilege requirements
    #[arg(short = 't', long)]
    pub test: bool,

    /// Package manager to use instead of detecting one (pacman, apt, yum, dnf)
    #[arg(short = 'b', long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Settings file (default: $WTFPKG_CONFIG or the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests;
