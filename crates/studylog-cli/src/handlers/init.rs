use anyhow::Result;

use crate::config::Config;
use crate::context::ExecutionContext;

/// Bootstrap the data directory: write default config when missing and
/// seed sample data into empty collections.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    std::fs::create_dir_all(ctx.data_dir())?;

    let config_path = ctx.config_path();
    if config_path.exists() {
        println!("Config: {} (existing)", config_path.display());
    } else {
        Config::default().save_to(&config_path)?;
        println!("Config: {} (created)", config_path.display());
    }

    let store = ctx.store();
    store.seed_if_empty()?;

    let sessions = store.list_sessions()?;
    let goals = store.list_goals()?;

    println!("Data directory: {}", ctx.data_dir().display());
    println!("Sessions: {} · Goals: {}", sessions.len(), goals.len());
    Ok(())
}
