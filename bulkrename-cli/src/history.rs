use anyhow::Result;
use bulkrename_core::{clear_history_operation, history_operation, Options, Renamer};

pub fn handle_history(options: Options, limit: Option<usize>) -> Result<()> {
    let renamer = Renamer::new(options);
    let output = history_operation(&renamer, limit)?;
    println!("{output}");
    Ok(())
}

pub fn handle_clear_history(options: Options) -> Result<()> {
    let renamer = Renamer::new(options);
    let output = clear_history_operation(&renamer)?;
    println!("{output}");
    Ok(())
}
