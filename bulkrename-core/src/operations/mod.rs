//! High-level operations that correspond to CLI commands
//!
//! Each function drives a `Renamer` and returns the formatted text the CLI
//! prints, keeping argument parsing and output concerns out of the engine.

pub mod history;
pub mod rename;
pub mod rollback;

pub use history::{clear_history_operation, history_operation};
pub use rename::rename_operation;
pub use rollback::rollback_operation;
