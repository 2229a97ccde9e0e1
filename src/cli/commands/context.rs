use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::cli::ExtractArgs;
use crate::config::{Config, load_config};

/// Configuration for one command invocation, with CLI overrides applied on request.
pub struct CommandContext {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl CommandContext {
    /// Load `.ignrefrc.json` starting from the working directory.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        Ok(Self {
            config: loaded.config,
            from_file: loaded.from_file,
        })
    }

    pub fn ignition_root(&self, args: &ExtractArgs) -> PathBuf {
        args.ignition_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.ignition_root))
    }

    pub fn output_root(&self, args: &ExtractArgs) -> PathBuf {
        args.output_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.output_root))
    }

    pub fn docs_root(&self, docs_root: Option<&Path>) -> PathBuf {
        docs_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.docs_root))
    }

    pub fn runner_source(&self, source: Option<&Path>) -> PathBuf {
        source
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.runner_source))
    }
}
