use super::plan::{CommandPlan, Step};
use super::{apt, pacman, yum};
use crate::config::BackendConfig;
use crate::core::types::{Action, ActionRequest, Backend, Operation};
use crate::error::Result;
use crate::system::executor::{CommandRunner, Executor, SystemRunner};
use crate::system::output::OutputRouter;
use crate::system::privilege::PrivilegeGuard;
use crate::ui;

/// Runs generic actions against one package manager.
pub struct PackageHandler<R: CommandRunner = SystemRunner> {
    backend: Backend,
    config: BackendConfig,
    runner: R,
    guard: PrivilegeGuard,
}

impl PackageHandler<SystemRunner> {
    pub fn new(backend: Backend, config: BackendConfig) -> Self {
        Self::with_runner(backend, config, SystemRunner)
    }
}

impl<R: CommandRunner> PackageHandler<R> {
    pub fn with_runner(backend: Backend, config: BackendConfig, runner: R) -> Self {
        if config.test {
            ui::trace(&format!("created {} handler", backend));
        }
        let guard = PrivilegeGuard::detect(config.test);
        Self {
            backend,
            config,
            runner,
            guard,
        }
    }

    pub fn with_guard(mut self, guard: PrivilegeGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Validate `action` and `args`, then run the backend's native commands.
    ///
    /// Usage, invalid-action and privilege errors are returned before any
    /// command starts. Command failures come back as a non-zero code.
    pub fn dispatch(&self, action: &str, args: &[String]) -> Result<i32> {
        if self.config.is_tracing() {
            ui::trace(&format!("action: {}", action));
            ui::trace(&format!("args: {:?}", args));
        }

        let action: Action = action.parse()?;
        let request = ActionRequest::new(action, args.to_vec())?;
        let plan = self.plan(&request)?;
        self.run(plan)
    }

    /// Native commands for a validated request.
    pub fn plan(&self, request: &ActionRequest) -> Result<CommandPlan> {
        let op = request.operation();
        if op == Operation::ListInstalled && self.config.is_tracing() {
            ui::trace("listing all installed packages");
        }
        if self.config.names_only && self.config.is_verbose() && self.backend != Backend::Apt {
            ui::trace(&format!("--names-only is ignored by {}", self.backend));
        }

        match &self.backend {
            Backend::Pacman => pacman::plan(op, &self.config),
            Backend::Apt => apt::plan(op, &self.config),
            Backend::Yum { program } => yum::plan(program, op, &self.config),
        }
    }

    fn run(&self, plan: CommandPlan) -> Result<i32> {
        if let Some(action) = &plan.privileged {
            self.guard.require_elevated(action)?;
        }

        let executor = Executor::new(&self.runner, &self.config);
        let router = OutputRouter::new(&self.runner, &self.config);

        let mut code = 0;
        let last = plan.steps.len().saturating_sub(1);
        for (index, step) in plan.steps.iter().enumerate() {
            code = match step {
                Step::Exec(argv) => executor.execute(argv),
                Step::Routed(command) => router.route(command)?,
            };
            if index < last && code != 0 && self.config.is_tracing() {
                ui::trace(&format!("continuing after exit status {}", code));
            }
        }
        Ok(code)
    }
}
