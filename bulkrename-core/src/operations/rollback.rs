use crate::rename::Renamer;
use anyhow::Result;

/// Reverse the most recent batch - equivalent to the `bulkrename rollback`
/// command. Honors preview mode; reports per-entry results.
pub fn rollback_operation(renamer: &mut Renamer) -> Result<String> {
    Ok(renamer.rollback().format())
}
