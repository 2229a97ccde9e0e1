use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::extractor::ExtractionSummary;
use crate::issues::SyntaxErrorIssue;
use crate::validator::{PresenceCheck, ValidationReport};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractionSummary),
    Validate(ValidateSummary),
    Run(RunSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ValidateSummary {
    pub root: PathBuf,
    pub structure: PresenceCheck,
    pub critical_files: PresenceCheck,
    pub docs: ValidationReport,
}

impl ValidateSummary {
    /// True only if all three checks passed.
    pub fn passed(&self) -> bool {
        self.structure.is_ok() && self.critical_files.is_ok() && self.docs.passed()
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub source: PathBuf,
    pub block_count: usize,
    /// Set when the concatenated program does not parse; nothing else ran.
    pub syntax_error: Option<SyntaxErrorIssue>,
    pub emitted: Option<PathBuf>,
    pub extraction: Option<ExtractionSummary>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub created: bool,
}

/// Result of running ignref commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (extraction reports problems as warnings).
    pub exit_on_errors: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::for_errors(self.error_count, self.exit_on_errors)
    }
}
