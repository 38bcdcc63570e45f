use super::plan::{CommandPlan, argv, routed_with};
use crate::config::BackendConfig;
use crate::core::types::Operation;
use crate::error::Result;

fn update() -> Vec<String> {
    argv(&["apt", "update"], &[])
}

pub fn plan(op: Operation<'_>, config: &BackendConfig) -> Result<CommandPlan> {
    let plan = match op {
        Operation::FileOwner(path) => CommandPlan::exec(argv(&["dpkg", "-S", path], &[])),
        Operation::Info(package) => CommandPlan::exec(argv(&["apt-cache", "show", package], &[])),
        Operation::Find(term) => {
            let mut search = argv(&["apt", "search"], &[]);
            if config.names_only {
                search.push("--names-only".to_string());
            }
            search.push(term.to_string());

            let plan = CommandPlan::exec(search);
            if config.refresh {
                // The update runs as its own command; its status is ignored.
                plan.preceded_by(update()).privileged("find with refresh")
            } else {
                plan
            }
        }
        Operation::Install(packages) => {
            let plan = CommandPlan::exec(argv(&["apt", "install"], packages)).privileged("install");
            if config.refresh {
                plan.preceded_by(update())
            } else {
                plan
            }
        }
        Operation::Uninstall(packages) => {
            CommandPlan::exec(argv(&["apt", "remove"], packages)).privileged("uninstall")
        }
        Operation::ListPackage(package) => routed_with("dpkg -L", package)?,
        Operation::ListInstalled => CommandPlan::routed("apt list --installed | sort".to_string()),
    };
    Ok(plan)
}
