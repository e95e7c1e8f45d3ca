#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod backup;
pub mod config;
pub mod history;
pub mod operations;
pub mod pattern;
pub mod rename;
pub mod sanitize;

pub use backup::{BackupManager, BackupSession, BackupStatus};
pub use config::Config;
pub use history::{Ledger, RenameOperation, RollbackAction, RollbackReport};
pub use operations::{
    clear_history_operation, history_operation, rename_operation, rollback_operation,
};
pub use pattern::{expand_template, ExpandContext};
pub use rename::{BatchReport, Directive, DirectiveError, FileOutcome, Options, Renamer};
pub use sanitize::sanitize_filename;
