use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rename files in bulk using templates or find/replace rules
#[derive(Parser, Debug)]
#[command(name = "bulkrename")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Preview changes without touching the filesystem
    #[arg(long, global = true)]
    pub preview: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom rename log path
    #[arg(long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Run as if started in <PATH> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename a batch of files with a template or a find/replace rule
    Rename {
        /// Specific files to rename
        #[arg(short, long, num_args = 1.., value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Glob patterns to match (e.g. "*.jpg")
        #[arg(short, long, num_args = 1.., value_name = "GLOB")]
        pattern: Vec<String>,

        /// Search for matching files recursively
        #[arg(short, long)]
        recursive: bool,

        /// New filename template; see `bulkrename patterns` for placeholders
        #[arg(short, long, value_name = "TEMPLATE")]
        name: Option<String>,

        /// String to find in filenames
        #[arg(long, value_name = "STRING")]
        find: Option<String>,

        /// String to replace it with
        #[arg(long, value_name = "STRING")]
        replace: Option<String>,

        /// Treat the find string as a regular expression
        #[arg(long)]
        regex: bool,

        /// Case-insensitive find/replace
        #[arg(short = 'i', long)]
        case_insensitive: bool,

        /// Back up files before renaming
        #[arg(long)]
        backup: bool,

        /// Custom backup directory
        #[arg(long, value_name = "DIR")]
        backup_dir: Option<PathBuf>,
    },

    /// Reverse the most recent rename batch
    Rollback,

    /// Show the rename history
    History {
        /// Only show the most recent N entries
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Delete the rename history log
    ClearHistory,

    /// Show the available filename template placeholders
    Patterns,

    /// Show usage examples
    Examples,
}
