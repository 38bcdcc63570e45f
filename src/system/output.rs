use super::executor::{CommandRunner, Executor};
use crate::config::BackendConfig;
use crate::error::{Result, WtfError};
use std::path::Path;

/// Sends shell pipeline output to the screen, a file, or both.
pub struct OutputRouter<'a, R: CommandRunner> {
    executor: Executor<'a, R>,
    config: &'a BackendConfig,
}

impl<'a, R: CommandRunner> OutputRouter<'a, R> {
    pub fn new(runner: &'a R, config: &'a BackendConfig) -> Self {
        Self {
            executor: Executor::new(runner, config),
            config,
        }
    }

    /// Run `command` through the shell with the configured redirection.
    pub fn route(&self, command: &str) -> Result<i32> {
        let script = compose(command, self.config)?;
        Ok(self.executor.execute_shell(&script))
    }
}

/// Append redirection for the configured output file.
///
/// quiet → `cmd > file` (file only); otherwise `cmd | tee -- file` (both).
/// Without an output file the command is left as is.
pub fn compose(command: &str, config: &BackendConfig) -> Result<String> {
    let Some(output) = config.output.as_deref() else {
        return Ok(command.to_string());
    };

    let target = quote_path(output)?;
    if config.quiet {
        Ok(format!("{} > {}", command, target))
    } else {
        Ok(format!("{} | tee -- {}", command, target))
    }
}

/// Shell-quote a single word for a routed command string.
pub fn quote(word: &str) -> Result<String> {
    shlex::try_quote(word)
        .map(|quoted| quoted.into_owned())
        .map_err(|e| WtfError::InvalidArgument(format!("cannot quote '{}': {}", word, e)))
}

fn quote_path(path: &Path) -> Result<String> {
    let text = path.to_str().ok_or_else(|| {
        WtfError::InvalidArgument(format!(
            "output path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    quote(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::executor::SystemRunner;
    use std::path::PathBuf;

    fn config(output: Option<PathBuf>, quiet: bool) -> BackendConfig {
        BackendConfig {
            output,
            quiet,
            ..Default::default()
        }
    }

    #[test]
    fn no_output_is_screen_only() {
        let composed = compose("pacman -Qe", &config(None, true)).unwrap();
        assert_eq!(composed, "pacman -Qe");
    }

    #[test]
    fn quiet_redirects_to_file() {
        let composed =
            compose("pacman -Qe", &config(Some("/tmp/out.txt".into()), true)).unwrap();
        assert_eq!(composed, "pacman -Qe > /tmp/out.txt");
    }

    #[test]
    fn loud_tees() {
        let composed =
            compose("dpkg -L bash", &config(Some("/tmp/out.txt".into()), false)).unwrap();
        assert_eq!(composed, "dpkg -L bash | tee -- /tmp/out.txt");
    }

    #[test]
    fn output_path_is_quoted() {
        let composed =
            compose("rpm -qa", &config(Some("/tmp/my list.txt".into()), true)).unwrap();
        assert_eq!(composed, "rpm -qa > '/tmp/my list.txt'");
    }

    #[test]
    fn quote_rejects_nul() {
        assert!(quote("bad\0name").is_err());
        assert_eq!(quote("vim").unwrap(), "vim");
    }

    #[cfg(unix)]
    #[test]
    fn quiet_output_lands_only_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let config = config(Some(path.clone()), true);
        let runner = SystemRunner;

        let code = OutputRouter::new(&runner, &config)
            .route("printf 'hello\\n'")
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn tee_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents\n").unwrap();
        let config = config(Some(path.clone()), false);
        let runner = SystemRunner;

        let code = OutputRouter::new(&runner, &config)
            .route("printf 'fresh\\n'")
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[cfg(unix)]
    #[test]
    fn tee_accepts_dash_prefixed_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(Some(PathBuf::from("-list.txt")), false);
        let runner = SystemRunner;

        // Relative target, so tee sees an argument starting with '-'.
        let command = format!("cd {} && printf 'hello\\n'", quote_path(dir.path()).unwrap());
        let code = OutputRouter::new(&runner, &config).route(&command).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("-list.txt")).unwrap(),
            "hello\n"
        );
    }

    #[test]
    fn tee_ends_option_parsing() {
        let composed =
            compose("pacman -Qe", &config(Some("-list.txt".into()), false)).unwrap();
        assert_eq!(composed, "pacman -Qe | tee -- -list.txt");
    }
}
