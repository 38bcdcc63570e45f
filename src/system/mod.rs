//! Host-facing pieces: process execution, output routing and the privilege check.

pub mod executor;
pub mod output;
pub mod privilege;

pub use executor::{CommandRunner, Executor, GENERIC_FAILURE, SystemRunner};
pub use output::OutputRouter;
pub use privilege::PrivilegeGuard;
