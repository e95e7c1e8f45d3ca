use crate::rename::{Directive, Renamer};
use anyhow::Result;
use std::path::PathBuf;

/// Run one rename batch - equivalent to the `bulkrename rename` command.
/// Returns the per-file status lines plus the final count summary.
pub fn rename_operation(
    renamer: &mut Renamer,
    files: &[PathBuf],
    directive: &Directive,
) -> Result<String> {
    if files.is_empty() {
        return Ok("No files found to rename.".to_string());
    }

    let verbose = renamer.options().verbose;
    let report = renamer.rename_files(files, directive)?;
    Ok(report.format(verbose))
}
