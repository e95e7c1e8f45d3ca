use anyhow::{Context, Result};
use globset::Glob;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the files matching the given glob patterns, sorted and
/// de-duplicated. Non-recursive matching applies each pattern to plain
/// filenames in the current directory; recursive matching walks the tree
/// and applies it to the full relative path, with `*` free to cross
/// directory separators. Directories never qualify.
pub fn find_matching_files(patterns: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut matches = BTreeSet::new();

    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid file pattern: {pattern}"))?
            .compile_matcher();

        if recursive {
            for entry in WalkDir::new(".").into_iter().filter_map(Result::ok) {
                if entry.file_type().is_file() && glob.is_match(entry.path()) {
                    matches.insert(entry.path().to_path_buf());
                }
            }
        } else {
            for entry in fs::read_dir(".").context("Failed to read current directory")? {
                let entry = entry?;
                if entry.file_type()?.is_file() && glob.is_match(Path::new(&entry.file_name())) {
                    matches.insert(PathBuf::from(entry.file_name()));
                }
            }
        }
    }

    Ok(matches.into_iter().collect())
}
