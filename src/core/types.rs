use crate::error::{Result, WtfError};
use std::fmt;
use std::str::FromStr;

// Generic administrative verbs, uniform across backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    File,
    Find,
    Info,
    Install,
    Uninstall,
    List,
}

/// How many arguments an action takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub expected: usize,
    /// Whether trailing arguments beyond `expected` are allowed
    pub extra: bool,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::File,
        Action::Find,
        Action::Info,
        Action::Install,
        Action::Uninstall,
        Action::List,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::File => "file",
            Action::Find => "find",
            Action::Info => "info",
            Action::Install => "install",
            Action::Uninstall => "uninstall",
            Action::List => "list",
        }
    }

    /// Argument rule for a non-empty argument list.
    ///
    /// `list` is the one action that also accepts zero arguments; that case is
    /// handled by [`ActionRequest::new`] before this rule applies.
    pub fn arity(&self) -> Arity {
        match self {
            Action::Install | Action::Uninstall => Arity {
                expected: 1,
                extra: true,
            },
            Action::File | Action::Find | Action::Info | Action::List => Arity {
                expected: 1,
                extra: false,
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = WtfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(Action::File),
            "find" | "search" => Ok(Action::Find),
            "info" => Ok(Action::Info),
            "install" => Ok(Action::Install),
            "uninstall" => Ok(Action::Uninstall),
            "list" => Ok(Action::List),
            other => Err(WtfError::InvalidAction(other.to_string())),
        }
    }
}

/// An action together with its arguments, checked against the action's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    action: Action,
    args: Vec<String>,
}

/// What a validated request asks the backend to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    FileOwner(&'a str),
    Find(&'a str),
    Info(&'a str),
    Install(&'a [String]),
    Uninstall(&'a [String]),
    ListPackage(&'a str),
    ListInstalled,
}

impl ActionRequest {
    pub fn new(action: Action, args: Vec<String>) -> Result<Self> {
        if !(action == Action::List && args.is_empty()) {
            validate_arg_count(action, &args, action.arity())?;
        }
        Ok(Self { action, args })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn operation(&self) -> Operation<'_> {
        // Arity was checked in `new`, so indexing the first argument is safe
        // for every action except the zero-argument list.
        match self.action {
            Action::File => Operation::FileOwner(&self.args[0]),
            Action::Find => Operation::Find(&self.args[0]),
            Action::Info => Operation::Info(&self.args[0]),
            Action::Install => Operation::Install(&self.args),
            Action::Uninstall => Operation::Uninstall(&self.args),
            Action::List => match self.args.first() {
                Some(package) => Operation::ListPackage(package),
                None => Operation::ListInstalled,
            },
        }
    }
}

fn validate_arg_count(action: Action, args: &[String], arity: Arity) -> Result<()> {
    let count = args.len();
    if count < arity.expected || (!arity.extra && count > arity.expected) {
        return Err(WtfError::Usage {
            action: action.to_string(),
            expected: arity.expected,
            extra: arity.extra,
        });
    }
    Ok(())
}

// Supported package managers. Exactly one is selected per invocation.
// yum and dnf share one variant; only the program name differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    Pacman,
    Apt,
    Yum { program: String },
}

impl Backend {
    pub const NAMES: [&'static str; 4] = ["pacman", "apt", "yum", "dnf"];

    pub fn yum() -> Self {
        Backend::Yum {
            program: "yum".to_string(),
        }
    }

    pub fn dnf() -> Self {
        Backend::Yum {
            program: "dnf".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Backend::Pacman => "pacman",
            Backend::Apt => "apt",
            Backend::Yum { program } => program,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Backend {
    type Err = WtfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pacman" => Ok(Backend::Pacman),
            "apt" => Ok(Backend::Apt),
            "yum" => Ok(Backend::yum()),
            "dnf" => Ok(Backend::dnf()),
            other => Err(WtfError::ConfigError(format!(
                "Unknown backend '{}'. Valid backends: {}",
                other,
                Backend::NAMES.join(", ")
            ))),
        }
    }
}
