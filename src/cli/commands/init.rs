use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration; refuse to overwrite an existing file.
pub fn init() -> Result<CommandResult> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    let created = !path.exists();

    if created {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path, created }),
        error_count: usize::from(!created),
        exit_on_errors: true,
    })
}
