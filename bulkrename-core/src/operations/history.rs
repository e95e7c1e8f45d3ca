use crate::rename::Renamer;
use anyhow::Result;

/// Render the durable history - equivalent to `bulkrename history`.
pub fn history_operation(renamer: &Renamer, limit: Option<usize>) -> Result<String> {
    renamer.show_history(limit)
}

/// Delete the durable history - equivalent to `bulkrename clear-history`.
pub fn clear_history_operation(renamer: &Renamer) -> Result<String> {
    if renamer.clear_history()? {
        Ok("History cleared.".to_string())
    } else {
        Ok("No history to clear.".to_string())
    }
}
