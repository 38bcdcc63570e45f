use super::plan::{CommandPlan, argv, routed_with};
use crate::config::BackendConfig;
use crate::core::types::Operation;
use crate::error::Result;

const RPM_LIST_ALL: &str =
    r"rpm -qa --qf '%{name}-%{version}-%{release}.%{arch}.rpm\n' | sort";

/// `<program> [--refresh] <verb> <args...>`
fn managed(program: &str, verb: &str, args: &[String], refresh: bool) -> Vec<String> {
    let mut cmd = argv(&[program, verb], args);
    if refresh {
        cmd.insert(1, "--refresh".to_string());
    }
    cmd
}

/// Plan for the yum family; `program` is the binary name (`yum` or `dnf`).
pub fn plan(program: &str, op: Operation<'_>, config: &BackendConfig) -> Result<CommandPlan> {
    let plan = match op {
        Operation::FileOwner(path) => CommandPlan::exec(argv(&["rpm", "-qf", path], &[])),
        Operation::Info(package) => CommandPlan::exec(argv(&["rpm", "-qi", package], &[])),
        Operation::Find(term) => {
            let plan = CommandPlan::exec(managed(
                program,
                "search",
                &[term.to_string()],
                config.refresh,
            ));
            if config.refresh {
                plan.privileged("find with refresh")
            } else {
                plan
            }
        }
        Operation::Install(packages) => {
            CommandPlan::exec(managed(program, "install", packages, config.refresh))
                .privileged("install")
        }
        Operation::Uninstall(packages) => {
            CommandPlan::exec(managed(program, "remove", packages, false)).privileged("uninstall")
        }
        Operation::ListPackage(package) => routed_with("rpm -ql", package)?,
        Operation::ListInstalled => CommandPlan::routed(RPM_LIST_ALL.to_string()),
    };
    Ok(plan)
}
