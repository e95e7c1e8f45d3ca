use crate::rename::{Directive, Options};
use anyhow::{Context, Result};
use filetime::FileTime;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Snapshot of one backup session: where it landed and which files were
/// copied into it.
#[derive(Debug)]
pub struct BackupSession {
    pub dir: PathBuf,
    pub copied: Vec<(PathBuf, PathBuf)>,
}

/// Result of the pre-batch backup attempt. Failure is advisory: the rename
/// batch proceeds regardless, it is only reported.
#[derive(Debug)]
pub enum BackupStatus {
    Disabled,
    Completed(BackupSession),
    Failed(String),
}

/// The `metadata.json` record written into every session directory.
#[derive(Serialize)]
struct SessionMetadata<'a> {
    timestamp: &'a str,
    files: Vec<PathBuf>,
    options: MetadataOptions<'a>,
}

#[derive(Serialize)]
struct MetadataOptions<'a> {
    directive: &'a Directive,
    #[serde(flatten)]
    settings: &'a Options,
}

/// Copies input files and operation metadata into a timestamped session
/// directory before any rename happens.
#[derive(Debug)]
pub struct BackupManager {
    root: PathBuf,
    enabled: bool,
}

impl BackupManager {
    pub fn new(root: PathBuf, enabled: bool) -> Self {
        Self { root, enabled }
    }

    /// Best-effort snapshot of `files`. Disabled managers report
    /// `Disabled`; any copy or metadata failure aborts the whole backup and
    /// reports `Failed`, but never blocks the batch that follows.
    pub fn create(
        &self,
        files: &[PathBuf],
        directive: &Directive,
        options: &Options,
    ) -> BackupStatus {
        if !self.enabled {
            return BackupStatus::Disabled;
        }
        match self.create_session(files, directive, options) {
            Ok(session) => BackupStatus::Completed(session),
            Err(e) => BackupStatus::Failed(format!("{e:#}")),
        }
    }

    fn create_session(
        &self,
        files: &[PathBuf],
        directive: &Directive,
        options: &Options,
    ) -> Result<BackupSession> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let session_dir = self.root.join(format!("backup_{timestamp}"));
        fs::create_dir_all(&session_dir).with_context(|| {
            format!("Failed to create backup directory: {}", session_dir.display())
        })?;

        let mut copied = Vec::new();
        for file in files {
            if !file.exists() {
                continue;
            }
            let Some(filename) = file.file_name() else {
                continue;
            };
            let dest = session_dir.join(filename);
            copy_preserving_mtime(file, &dest)
                .with_context(|| format!("Failed to back up {}", file.display()))?;
            copied.push((file.clone(), dest));
        }

        let metadata = SessionMetadata {
            timestamp: &timestamp,
            files: files.iter().map(|f| absolute_path(f)).collect(),
            options: MetadataOptions {
                directive,
                settings: options,
            },
        };

        let meta_path = session_dir.join("metadata.json");
        let meta_file = File::create(&meta_path)
            .with_context(|| format!("Failed to create {}", meta_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(meta_file), &metadata)
            .with_context(|| format!("Failed to write {}", meta_path.display()))?;

        Ok(BackupSession {
            dir: session_dir,
            copied,
        })
    }
}

/// `fs::copy` plus the source's modification time, so the snapshot carries
/// the timestamps that date placeholders would see.
fn copy_preserving_mtime(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)?;
    let metadata = fs::metadata(src)?;
    filetime::set_file_mtime(dest, FileTime::from_last_modification_time(&metadata))?;
    Ok(())
}

fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
