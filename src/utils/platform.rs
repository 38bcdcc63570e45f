use crate::error::{Result, WtfError};
use std::process::Command;

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <script>`
/// - Windows: `cmd /C <script>`
pub fn build_shell_command(script: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(script);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }
}

/// Build a direct program invocation from an argument vector.
///
/// The first element is the program; no shell is involved, so arguments with
/// spaces or metacharacters reach the program verbatim.
pub fn build_program_command(argv: &[String]) -> Result<Command> {
    let (program, args) = argv.split_first().ok_or_else(|| {
        WtfError::InvalidArgument("cannot run an empty command".to_string())
    })?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

/// Render an argument vector for traces.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

#[cfg(test)]
mod tests;
