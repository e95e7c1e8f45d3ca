use crate::discover;
use anyhow::Result;
use bulkrename_core::{rename_operation, Directive, Options, Renamer};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_rename(
    mut options: Options,
    files: Vec<PathBuf>,
    patterns: &[String],
    recursive: bool,
    name: Option<String>,
    find: Option<String>,
    replace: Option<String>,
    regex: bool,
    case_insensitive: bool,
    backup: bool,
    backup_dir: Option<PathBuf>,
) -> Result<()> {
    options.create_backup = backup;
    if let Some(dir) = backup_dir {
        options.backup_dir = dir;
    }

    // Directive-shape errors abort before any filesystem mutation
    let directive = Directive::from_parts(name, find, replace, regex, !case_insensitive)?;

    let candidates: Vec<PathBuf> = if files.is_empty() {
        discover::find_matching_files(patterns, recursive)?
    } else {
        files.into_iter().filter(|f| f.exists()).collect()
    };

    if options.verbose && !candidates.is_empty() {
        println!("Found {} files to process.", candidates.len());
    }

    let mut renamer = Renamer::new(options);
    let output = rename_operation(&mut renamer, &candidates, &directive)?;
    println!("{output}");
    Ok(())
}
