use crate::error::Result;
use crate::system::output::quote;

/// One command in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Argument-vector execution, no shell involved
    Exec(Vec<String>),
    /// Shell pipeline sent through the output router
    Routed(String),
}

/// Native commands for one action, in execution order.
///
/// The result of a plan is the result of its last step. Earlier steps (such as
/// an index refresh) are best-effort: their failure does not stop the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    /// Description of the privileged action, when elevation is required
    pub privileged: Option<String>,
    pub steps: Vec<Step>,
}

impl CommandPlan {
    pub fn exec(argv: Vec<String>) -> Self {
        Self {
            privileged: None,
            steps: vec![Step::Exec(argv)],
        }
    }

    pub fn routed(command: String) -> Self {
        Self {
            privileged: None,
            steps: vec![Step::Routed(command)],
        }
    }

    pub fn privileged(mut self, action: &str) -> Self {
        self.privileged = Some(action.to_string());
        self
    }

    /// Run `argv` before the existing steps.
    pub fn preceded_by(mut self, argv: Vec<String>) -> Self {
        self.steps.insert(0, Step::Exec(argv));
        self
    }
}

/// Build an argument vector from fixed words followed by user arguments.
pub fn argv(words: &[&str], args: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.to_string())
        .chain(args.iter().cloned())
        .collect()
}

/// Build a routed shell command `<prefix> <quoted package>`.
pub fn routed_with(prefix: &str, package: &str) -> Result<CommandPlan> {
    Ok(CommandPlan::routed(format!("{} {}", prefix, quote(package)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_appends_in_order() {
        let args = vec!["vim".to_string(), "git".to_string()];
        assert_eq!(argv(&["pacman", "-S"], &args), vec!["pacman", "-S", "vim", "git"]);
    }

    #[test]
    fn preceded_by_inserts_first() {
        let plan = CommandPlan::exec(argv(&["apt", "search", "nginx"], &[]))
            .preceded_by(argv(&["apt", "update"], &[]));
        assert_eq!(
            plan.steps,
            vec![
                Step::Exec(argv(&["apt", "update"], &[])),
                Step::Exec(argv(&["apt", "search", "nginx"], &[])),
            ]
        );
        assert_eq!(plan.privileged, None);
    }

    #[test]
    fn routed_with_quotes_package() {
        let plan = routed_with("dpkg -L", "weird name").unwrap();
        assert_eq!(plan.steps, vec![Step::Routed("dpkg -L 'weird name'".to_string())]);
    }
}
