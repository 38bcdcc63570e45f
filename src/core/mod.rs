pub mod types;

pub use types::{Action, ActionRequest, Arity, Backend, Operation};
