use anyhow::Result;
use bulkrename_core::{rollback_operation, Options, Renamer};

/// The rollback buffer only tracks batches run by this process, so a
/// standalone `rollback` invocation reports that there is nothing to
/// reverse.
pub fn handle_rollback(options: Options) -> Result<()> {
    let mut renamer = Renamer::new(options);
    let output = rollback_operation(&mut renamer)?;
    println!("{output}");
    Ok(())
}
