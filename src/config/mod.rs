pub mod settings;
pub mod types;

pub use settings::{ColorMode, Settings};
pub use types::BackendConfig;
