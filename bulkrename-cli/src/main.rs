use anyhow::{Context, Result};
use bulkrename_core::{Config, Options};
use clap::Parser;
use std::process;

mod cli;
mod discover;
mod help;
mod history;
mod rename;
mod rollback;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag before anything touches relative paths
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let config = Config::load().unwrap_or_default();

    if let Err(e) = run(cli, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let options = Options {
        preview: cli.preview,
        verbose: cli.verbose || config.defaults.verbose,
        create_backup: false,
        backup_dir: config.defaults.backup_dir.clone(),
        log_file: cli
            .log
            .unwrap_or_else(|| config.defaults.log_file.clone()),
    };

    match cli.command {
        Commands::Rename {
            files,
            pattern,
            recursive,
            name,
            find,
            replace,
            regex,
            case_insensitive,
            backup,
            backup_dir,
        } => rename::handle_rename(
            options,
            files,
            &pattern,
            recursive,
            name,
            find,
            replace,
            regex,
            case_insensitive,
            backup,
            backup_dir,
        ),
        Commands::Rollback => rollback::handle_rollback(options),
        Commands::History { limit } => history::handle_history(options, limit),
        Commands::ClearHistory => history::handle_clear_history(options),
        Commands::Patterns => {
            println!("{}", help::PATTERNS);
            Ok(())
        },
        Commands::Examples => {
            println!("{}", help::EXAMPLES);
            Ok(())
        },
    }
}
