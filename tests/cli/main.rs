use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod extract;
mod init;
mod run;
mod validate;

const BIN_NAME: &str = "ignref";

pub const EXPECTED_DIRS: [&str; 13] = [
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
];

pub const CRITICAL_FILES: [&str; 6] = [
    "README.md",
    "LICENSE",
    "CONTRIBUTING.md",
    ".gitignore",
    "COMPONENTS_INDEX.md",
    "COVERAGE_ANALYSIS.md",
];

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config search from leaving the test directory.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn create_dir(&self, path: &str) -> Result<()> {
        let dir = self.project_dir.join(path);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))
    }

    /// Lay out a documentation tree under `docs/` that passes every check.
    pub fn conformant_docs(&self) -> Result<()> {
        for dir in EXPECTED_DIRS {
            self.create_dir(&format!("docs/{}", dir))?;
        }
        for file in CRITICAL_FILES {
            self.write_file(
                &format!("docs/{}", file),
                "# Ignition Reference\n\n## Documentation Links\n- [Index](COMPONENTS_INDEX.md)\n",
            )?;
        }
        self.write_file(
            "docs/tags/udt.md",
            "# UDTs\n\n```params\ntag_path: [default]Line1\n```\n\n```python\nvalue = system.tag.readBlocking(['[default]Line1/Speed'])[0].value\n```\n\n## Documentation Links\n- [Tags](../README.md)\n",
        )?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("extract");
        cmd
    }

    pub fn validate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("validate");
        cmd
    }

    pub fn run_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("run");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
