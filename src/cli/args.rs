//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan an Ignition installation and write category documents
//! - `validate`: Validate a documentation tree before publishing
//! - `run`: Syntax-check a markdown script and run the extraction bootstrap
//! - `init`: Initialize ignref configuration file
//!
//! Every command runs without flags; flags only override `.ignrefrc.json`.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Source and destination roots for extraction.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Ignition installation root (overrides config file)
    #[arg(long, env = "IGNITION_ROOT")]
    pub ignition_root: Option<PathBuf>,

    /// Directory the documents are written to (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Documentation tree to validate (overrides config file)
    #[arg(long)]
    pub docs_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RunCommand {
    /// Markdown file holding the python blocks (overrides config file)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Also write the concatenated python program to this path
    #[arg(long)]
    pub emit: Option<PathBuf>,

    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan an Ignition installation and write category documentation
    Extract(ExtractCommand),
    /// Validate structure, critical files and markdown code blocks of a documentation tree
    Validate(ValidateCommand),
    /// Syntax-check the python blocks of a markdown file, then run the extraction
    Run(RunCommand),
    /// Initialize a new .ignrefrc.json configuration file
    Init,
}
