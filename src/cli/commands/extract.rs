use anyhow::Result;

use super::{CommandResult, CommandSummary, context::CommandContext};
use crate::cli::{ExtractArgs, ExtractCommand};
use crate::extractor::{ExtractionSummary, Extractor};

/// Extraction never fails the process: a missing installation only
/// produces template-only documents.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load()?;
    let summary = run_extraction(&ctx, &cmd.args)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(summary),
        error_count: 0,
        exit_on_errors: false,
    })
}

pub(crate) fn run_extraction(ctx: &CommandContext, args: &ExtractArgs) -> Result<ExtractionSummary> {
    Extractor::new(ctx.ignition_root(args), ctx.output_root(args)).run_extraction()
}
