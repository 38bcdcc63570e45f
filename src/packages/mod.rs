//! # Package Manager Handlers
//!
//! One generic action set (file, find, info, install, uninstall, list) mapped
//! onto native package managers.
//!
//! ## Architecture
//!
//! - [`handler::PackageHandler`] validates the action and its arguments,
//!   checks privileges and runs the resulting commands.
//! - `pacman`, `apt` and `yum` turn a validated [`Operation`] into a
//!   [`CommandPlan`]. dnf reuses the yum plan with its own program name.
//! - Plans are data, so command construction is testable without spawning
//!   anything.
//!
//! [`Operation`]: crate::core::types::Operation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wtfpkg::config::BackendConfig;
//! use wtfpkg::core::types::Backend;
//! use wtfpkg::packages::PackageHandler;
//!
//! let handler = PackageHandler::new(Backend::Apt, BackendConfig::default());
//! let code = handler.dispatch("info", &["nginx".to_string()])?;
//! println!("exit status {}", code);
//! # Ok::<(), wtfpkg::error::WtfError>(())
//! ```

pub mod apt;
pub mod handler;
pub mod pacman;
pub mod plan;
pub mod yum;

pub use handler::PackageHandler;
pub use plan::{CommandPlan, Step};
