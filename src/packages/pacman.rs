use super::plan::{CommandPlan, argv, routed_with};
use crate::config::BackendConfig;
use crate::core::types::Operation;
use crate::error::Result;

/// pacman marks a refresh by appending `y` to the primary switch.
fn switch(base: &str, refresh: bool) -> String {
    if refresh {
        format!("{}y", base)
    } else {
        base.to_string()
    }
}

pub fn plan(op: Operation<'_>, config: &BackendConfig) -> Result<CommandPlan> {
    let plan = match op {
        Operation::FileOwner(path) => CommandPlan::exec(argv(&["pacman", "-Qo", path], &[])),
        Operation::Info(package) => CommandPlan::exec(argv(&["pacman", "-Qi", package], &[])),
        Operation::Find(term) => {
            let switches = switch("-Ss", config.refresh);
            let plan = CommandPlan::exec(argv(&["pacman", switches.as_str(), term], &[]));
            if config.refresh {
                plan.privileged("find with refresh")
            } else {
                plan
            }
        }
        Operation::Install(packages) => {
            let switches = switch("-S", config.refresh);
            CommandPlan::exec(argv(&["pacman", switches.as_str()], packages)).privileged("install")
        }
        Operation::Uninstall(packages) => {
            CommandPlan::exec(argv(&["pacman", "-R"], packages)).privileged("uninstall")
        }
        Operation::ListPackage(package) => routed_with("pacman -Ql", package)?,
        Operation::ListInstalled => CommandPlan::routed("pacman -Qe".to_string()),
    };
    Ok(plan)
}
