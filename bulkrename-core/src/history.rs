use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// One confirmed rename, as persisted in the durable log. Created only after
/// the filesystem reported success; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOperation {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    /// Epoch seconds, fractional.
    pub timestamp: f64,
    /// Human-readable local time, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
}

impl RenameOperation {
    pub fn new(old_path: PathBuf, new_path: PathBuf) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64());
        Self {
            old_path,
            new_path,
            timestamp,
            date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    fn basename(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// The result of reversing one ledger entry.
#[derive(Debug, Clone)]
pub enum RollbackAction {
    Reversed { from: PathBuf, to: PathBuf },
    WouldReverse { from: PathBuf, to: PathBuf },
    Missing(PathBuf),
    Failed { path: PathBuf, error: String },
}

/// Outcome of a rollback pass over the last batch, in execution order
/// (which is the reverse of the original rename order).
#[derive(Debug)]
pub struct RollbackReport {
    pub actions: Vec<RollbackAction>,
    pub complete: bool,
    pub preview: bool,
}

impl RollbackReport {
    pub fn format(&self) -> String {
        if self.actions.is_empty() {
            return "Nothing to roll back.".to_string();
        }

        let mut out = String::new();
        for action in &self.actions {
            let line = match action {
                RollbackAction::Reversed { from, to } => {
                    format!("Rolled back: {} -> {}", from.display(), to.display())
                },
                RollbackAction::WouldReverse { from, to } => {
                    format!("Would roll back: {} -> {}", from.display(), to.display())
                },
                RollbackAction::Missing(path) => {
                    format!("Warning: can't roll back {} (file doesn't exist)", path.display())
                },
                RollbackAction::Failed { path, error } => {
                    format!("Error rolling back {}: {}", path.display(), error)
                },
            };
            out.push_str(&line);
            out.push('\n');
        }
        out.pop();
        out
    }
}

/// Record keeper for rename batches: a durable, append-only JSON log shared
/// by every batch ever run, plus an in-memory buffer holding exactly the
/// operations of the most recently executed batch for rollback.
#[derive(Debug)]
pub struct Ledger {
    log_path: PathBuf,
    last_operation: Vec<RenameOperation>,
}

impl Ledger {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            last_operation: Vec::new(),
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Operations recorded by the most recent batch, in rename order.
    pub fn last_batch(&self) -> &[RenameOperation] {
        &self.last_operation
    }

    /// Reset the rollback buffer. Called once at the start of every batch,
    /// preview included, so the buffer never mixes two invocations.
    pub fn begin_batch(&mut self) {
        self.last_operation.clear();
    }

    /// Append a confirmed rename to both the durable log and the rollback
    /// buffer. The log is rewritten in full on every append (read-modify-
    /// write), so a failure mid-write can only affect the in-flight entry.
    pub fn record(&mut self, old_path: &Path, new_path: &Path) -> Result<()> {
        let operation = RenameOperation::new(old_path.to_path_buf(), new_path.to_path_buf());

        let mut log = Self::read_log(&self.log_path)?;
        log.push(operation.clone());
        self.write_log(&log)?;

        self.last_operation.push(operation);
        Ok(())
    }

    fn read_log(path: &Path) -> Result<Vec<RenameOperation>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(path)
            .with_context(|| format!("Failed to open rename log: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse rename log: {}", path.display()))
    }

    fn write_log(&self, log: &[RenameOperation]) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to create rename log: {}", self.log_path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, log)
            .with_context(|| format!("Failed to write rename log: {}", self.log_path.display()))
    }

    /// Reverse the most recent batch, newest rename first, so that later
    /// renames which took over an earlier rename's vacated name are moved
    /// out of the way before the earlier one is restored. The durable log is
    /// an audit trail and is deliberately left untouched.
    pub fn rollback(&mut self, preview: bool) -> RollbackReport {
        let mut actions = Vec::new();
        let mut complete = true;

        for op in self.last_operation.iter().rev() {
            if op.new_path.exists() {
                if preview {
                    actions.push(RollbackAction::WouldReverse {
                        from: op.new_path.clone(),
                        to: op.old_path.clone(),
                    });
                } else {
                    match fs::rename(&op.new_path, &op.old_path) {
                        Ok(()) => actions.push(RollbackAction::Reversed {
                            from: op.new_path.clone(),
                            to: op.old_path.clone(),
                        }),
                        Err(e) => {
                            actions.push(RollbackAction::Failed {
                                path: op.new_path.clone(),
                                error: e.to_string(),
                            });
                            complete = false;
                        },
                    }
                }
            } else {
                actions.push(RollbackAction::Missing(op.new_path.clone()));
                complete = false;
            }
        }

        // Repeated rollback becomes a safe no-op
        if complete && !preview {
            self.last_operation.clear();
        }

        RollbackReport {
            actions,
            complete,
            preview,
        }
    }

    /// Render the most recent `limit` durable log entries (all when `None`)
    /// as a table, oldest first. An explicit limit of 0 is honored and
    /// yields an empty table.
    pub fn show_history(&self, limit: Option<usize>) -> Result<String> {
        if !self.log_path.exists() {
            return Ok("No history found.".to_string());
        }

        let log = Self::read_log(&self.log_path)?;
        let entries: Vec<&RenameOperation> = match limit {
            Some(n) => log.iter().skip(log.len().saturating_sub(n)).collect(),
            None => log.iter().collect(),
        };

        use comfy_table::{Cell, Color, Table};

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Original Name").fg(Color::Cyan),
            Cell::new("New Name").fg(Color::Cyan),
        ]);

        for entry in &entries {
            table.add_row(vec![
                entry.date.clone(),
                RenameOperation::basename(&entry.old_path),
                RenameOperation::basename(&entry.new_path),
            ]);
        }

        Ok(format!(
            "Rename History (Last {} operations):\n{}",
            entries.len(),
            table
        ))
    }

    /// Delete the durable log. Returns `false` when there was no log to
    /// clear, which is a no-op rather than an error.
    pub fn clear_history(&self) -> Result<bool> {
        if !self.log_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.log_path)
            .with_context(|| format!("Failed to remove rename log: {}", self.log_path.display()))?;
        Ok(true)
    }
}
