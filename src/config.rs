use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ignrefrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignition_root")]
    pub ignition_root: String,
    #[serde(default = "default_root")]
    pub output_root: String,
    #[serde(default = "default_root")]
    pub docs_root: String,
    #[serde(default = "default_expected_dirs")]
    pub expected_dirs: Vec<String>,
    #[serde(default = "default_critical_files")]
    pub critical_files: Vec<String>,
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_runner_source")]
    pub runner_source: String,
}

fn default_ignition_root() -> String {
    if cfg!(windows) {
        r"C:\Program Files\Inductive Automation\Ignition".to_string()
    } else {
        "/usr/local/bin/ignition".to_string()
    }
}

fn default_root() -> String {
    "./".to_string()
}

fn default_expected_dirs() -> Vec<String> {
    [
        "configuration",
        "database",
        "tags",
        "security",
        "perspective",
        "vision",
        "reporting",
        "sfc",
        "gateway",
        "devices",
        "scripting",
        "webdev",
        "ignition_cli",
    ]
    .map(String::from)
    .to_vec()
}

fn default_critical_files() -> Vec<String> {
    [
        "README.md",
        "LICENSE",
        "CONTRIBUTING.md",
        ".gitignore",
        "COMPONENTS_INDEX.md",
        "COVERAGE_ANALYSIS.md",
    ]
    .map(String::from)
    .to_vec()
}

fn default_skip_files() -> Vec<String> {
    ["README_GITHUB.md", "setup_github.md"]
        .map(String::from)
        .to_vec()
}

fn default_runner_source() -> String {
    "extract_components.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignition_root: default_ignition_root(),
            output_root: default_root(),
            docs_root: default_root(),
            expected_dirs: default_expected_dirs(),
            critical_files: default_critical_files(),
            skip_files: default_skip_files(),
            ignores: Vec::new(),
            runner_source: default_runner_source(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `ignores` is not a valid glob, or if
    /// a `skipFiles` entry is a path rather than a bare file name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Skip entries are matched against file names only
        for name in &self.skip_files {
            if name.contains('/') || name.contains('\\') {
                bail!(
                    "Invalid entry in 'skipFiles': \"{}\" (expected a file name, not a path)",
                    name
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
