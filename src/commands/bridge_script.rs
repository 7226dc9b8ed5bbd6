//! Bridge script command implementation

use std::path::PathBuf;

use crate::bridge;
use crate::commands::helpers::load_workspace;
use crate::error::Result;

/// Print the observer script with the configured boot ping delay
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let (_, config) = load_workspace(workspace)?;
    print!("{}", bridge::observer_script(config.boot_ping_delay_ms));
    Ok(())
}
