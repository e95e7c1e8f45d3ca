use crate::backup::{BackupManager, BackupStatus};
use crate::history::Ledger;
use crate::pattern::{expand_template, ExpandContext};
use crate::sanitize::sanitize_filename;
use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Invalid combinations of renaming rule inputs. The only batch-fatal input
/// error: everything downstream is per-file and non-fatal.
#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("supply either a filename template or a find/replace pair, not both")]
    Conflicting,
    #[error("no renaming rule supplied: use a template or a find/replace pair")]
    Missing,
    #[error("find and replace must be supplied together")]
    Incomplete,
    #[error("invalid find pattern: {0}")]
    BadRegex(#[from] regex::Error),
}

/// The renaming rule for one batch: a placeholder template, or a
/// find/replace rule over the bare filename.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Directive {
    Template { template: String },
    FindReplace {
        find: String,
        replace: String,
        use_regex: bool,
        case_sensitive: bool,
    },
}

impl Directive {
    /// Validate the raw rule inputs. Exactly one form must be present, and a
    /// regex rule must compile, before any filesystem mutation happens.
    pub fn from_parts(
        template: Option<String>,
        find: Option<String>,
        replace: Option<String>,
        use_regex: bool,
        case_sensitive: bool,
    ) -> Result<Self, DirectiveError> {
        match (template, find, replace) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(DirectiveError::Conflicting),
            (Some(template), None, None) => Ok(Self::Template { template }),
            (None, Some(find), Some(replace)) => {
                if use_regex {
                    // Compile now so a bad pattern aborts the whole batch
                    Self::build_regex(&find, case_sensitive)?;
                }
                Ok(Self::FindReplace {
                    find,
                    replace,
                    use_regex,
                    case_sensitive,
                })
            },
            (None, Some(_), None) | (None, None, Some(_)) => Err(DirectiveError::Incomplete),
            (None, None, None) => Err(DirectiveError::Missing),
        }
    }

    fn build_regex(find: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
        RegexBuilder::new(find)
            .case_insensitive(!case_sensitive)
            .build()
    }
}

/// Batch-level settings, assembled by the caller from flags and config.
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    pub preview: bool,
    pub verbose: bool,
    pub create_backup: bool,
    pub backup_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preview: false,
            verbose: false,
            create_backup: false,
            backup_dir: PathBuf::from(".rename_backup"),
            log_file: PathBuf::from("rename_log.json"),
        }
    }
}

/// What happened to one candidate file. Every variant is local to its file;
/// none of them aborts the batch.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    WouldRename { from: PathBuf, to: PathBuf },
    Missing(PathBuf),
    /// Computed name equals the original; verbose-only notice.
    Unchanged(PathBuf),
    Collision { from: PathBuf, to: PathBuf },
    Failed { path: PathBuf, error: String },
}

/// Per-file outcomes plus the aggregate count for one batch.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub renamed: usize,
    pub preview: bool,
    pub backup: BackupStatus,
}

impl BatchReport {
    fn filename(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Render the line-per-file status output followed by the final count
    /// summary, as the CLI prints it.
    pub fn format(&self, verbose: bool) -> String {
        let mut out = String::new();

        match &self.backup {
            BackupStatus::Disabled => {},
            BackupStatus::Completed(session) => {
                if verbose {
                    for (src, dest) in &session.copied {
                        let _ = writeln!(out, "Backed up: {} -> {}", src.display(), dest.display());
                    }
                }
            },
            BackupStatus::Failed(error) => {
                let _ = writeln!(out, "Error creating backup: {error}");
            },
        }

        for outcome in &self.outcomes {
            match outcome {
                FileOutcome::Renamed { from, to } => {
                    let _ = writeln!(
                        out,
                        "Renamed: {} -> {}",
                        Self::filename(from),
                        Self::filename(to)
                    );
                },
                FileOutcome::WouldRename { from, to } => {
                    let _ = writeln!(
                        out,
                        "Would rename: {} -> {}",
                        Self::filename(from),
                        Self::filename(to)
                    );
                },
                FileOutcome::Missing(path) => {
                    let _ = writeln!(out, "Warning: {} doesn't exist, skipping.", path.display());
                },
                FileOutcome::Unchanged(path) => {
                    if verbose {
                        let _ = writeln!(out, "Skipping {} (no change)", Self::filename(path));
                    }
                },
                FileOutcome::Collision { to, .. } => {
                    let _ = writeln!(
                        out,
                        "Error: can't rename to {} (already exists)",
                        Self::filename(to)
                    );
                },
                FileOutcome::Failed { path, error } => {
                    let _ = writeln!(out, "Error renaming {}: {}", Self::filename(path), error);
                },
            }
        }

        let prefix = if self.preview { "Preview of " } else { "" };
        let _ = write!(out, "\n{}Renamed {} file(s).", prefix, self.renamed);
        out
    }
}

/// Runs rename batches and owns the per-process ledger. The batch counter
/// and the rollback buffer live here rather than in globals, so repeated
/// invocations within one process never cross-contaminate.
#[derive(Debug)]
pub struct Renamer {
    options: Options,
    ledger: Ledger,
    backup: BackupManager,
}

impl Renamer {
    pub fn new(options: Options) -> Self {
        let ledger = Ledger::new(options.log_file.clone());
        let backup = BackupManager::new(options.backup_dir.clone(), options.create_backup);
        Self {
            options,
            ledger,
            backup,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Execute one batch over `files` in input order. Per-file problems are
    /// reported as outcomes and never abort the run; only a ledger write
    /// failure is a batch-level error.
    pub fn rename_files(&mut self, files: &[PathBuf], directive: &Directive) -> Result<BatchReport> {
        // Preview must not touch the filesystem, so no backup session either
        let backup = if files.is_empty() || self.options.preview {
            BackupStatus::Disabled
        } else {
            self.backup.create(files, directive, &self.options)
        };

        self.ledger.begin_batch();

        // Pre-compile the find regex once per batch
        let find_regex = match directive {
            Directive::FindReplace {
                find,
                use_regex: true,
                case_sensitive,
                ..
            } => Some(Directive::build_regex(find, *case_sensitive).map_err(DirectiveError::from)?),
            _ => None,
        };

        let mut outcomes = Vec::with_capacity(files.len());
        let mut renamed = 0;
        let mut counter: u64 = 1;

        for file in files {
            if !file.exists() {
                outcomes.push(FileOutcome::Missing(file.clone()));
                continue;
            }

            let Some(filename) = file.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                outcomes.push(FileOutcome::Failed {
                    path: file.clone(),
                    error: "not a regular file path".to_string(),
                });
                continue;
            };

            let new_filename = match directive {
                Directive::Template { template } => {
                    let ctx = match ExpandContext::for_file(file, counter) {
                        Ok(ctx) => ctx,
                        Err(e) => {
                            outcomes.push(FileOutcome::Failed {
                                path: file.clone(),
                                error: e.to_string(),
                            });
                            continue;
                        },
                    };
                    sanitize_filename(&expand_template(template, &ctx))
                },
                Directive::FindReplace {
                    find,
                    replace,
                    case_sensitive,
                    ..
                } => {
                    if let Some(regex) = &find_regex {
                        regex.replace_all(&filename, replace.as_str()).into_owned()
                    } else if *case_sensitive {
                        filename.replace(find.as_str(), replace)
                    } else {
                        // Deliberately asymmetric: only the search term is
                        // lowercased, never the filename
                        filename.replace(&find.to_lowercase(), replace)
                    }
                },
            };

            if new_filename == filename {
                outcomes.push(FileOutcome::Unchanged(file.clone()));
                continue;
            }

            let dir = file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let new_path = dir.join(&new_filename);

            if new_path.exists() && new_path != *file {
                outcomes.push(FileOutcome::Collision {
                    from: file.clone(),
                    to: new_path,
                });
                continue;
            }

            if self.options.preview {
                outcomes.push(FileOutcome::WouldRename {
                    from: file.clone(),
                    to: new_path,
                });
            } else {
                match fs::rename(file, &new_path) {
                    Ok(()) => {
                        self.ledger.record(file, &new_path)?;
                        outcomes.push(FileOutcome::Renamed {
                            from: file.clone(),
                            to: new_path,
                        });
                        renamed += 1;
                    },
                    Err(e) => {
                        outcomes.push(FileOutcome::Failed {
                            path: file.clone(),
                            error: e.to_string(),
                        });
                    },
                }
            }

            // Only files that reached the rename/preview step consume a
            // counter value; earlier skips do not
            counter += 1;
        }

        Ok(BatchReport {
            outcomes,
            renamed,
            preview: self.options.preview,
            backup,
        })
    }

    /// Reverse the most recent batch (preview-aware).
    pub fn rollback(&mut self) -> crate::history::RollbackReport {
        self.ledger.rollback(self.options.preview)
    }

    pub fn show_history(&self, limit: Option<usize>) -> Result<String> {
        self.ledger.show_history(limit)
    }

    pub fn clear_history(&self) -> Result<bool> {
        self.ledger.clear_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_requires_exactly_one_form() {
        assert!(matches!(
            Directive::from_parts(None, None, None, false, true),
            Err(DirectiveError::Missing)
        ));
        assert!(matches!(
            Directive::from_parts(
                Some("x".into()),
                Some("a".into()),
                Some("b".into()),
                false,
                true
            ),
            Err(DirectiveError::Conflicting)
        ));
        assert!(matches!(
            Directive::from_parts(None, Some("a".into()), None, false, true),
            Err(DirectiveError::Incomplete)
        ));
        assert!(Directive::from_parts(Some("{count}".into()), None, None, false, true).is_ok());
        assert!(
            Directive::from_parts(None, Some("a".into()), Some("b".into()), false, true).is_ok()
        );
    }

    #[test]
    fn test_directive_rejects_bad_regex_up_front() {
        let result = Directive::from_parts(None, Some("[".into()), Some("".into()), true, true);
        assert!(matches!(result, Err(DirectiveError::BadRegex(_))));
    }

    #[test]
    fn test_options_defaults() {
        let options = Options::default();
        assert_eq!(options.log_file, PathBuf::from("rename_log.json"));
        assert_eq!(options.backup_dir, PathBuf::from(".rename_backup"));
        assert!(!options.preview);
        assert!(!options.create_backup);
    }
}
