use anyhow::Result;

use super::{CommandResult, CommandSummary, ValidateSummary, context::CommandContext};
use crate::cli::ValidateCommand;
use crate::validator::{
    DocumentationValidator, check_critical_files, check_repository_structure,
};

/// Run all three checks; none of them short-circuits the others.
pub fn validate(cmd: ValidateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load()?;
    let root = ctx.docs_root(cmd.docs_root.as_deref());
    let config = &ctx.config;

    let structure = check_repository_structure(&root, &config.expected_dirs);
    let critical_files = check_critical_files(&root, &config.critical_files);
    let docs = DocumentationValidator::new(&root, config.skip_files.clone(), &config.ignores)?
        .validate_all();

    let error_count = structure.missing.len() + critical_files.missing.len() + docs.error_count();

    Ok(CommandResult {
        summary: CommandSummary::Validate(ValidateSummary {
            root,
            structure,
            critical_files,
            docs,
        }),
        error_count,
        exit_on_errors: true,
    })
}
