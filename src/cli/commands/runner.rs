//! The `run` command.
//!
//! Collects the `python` blocks of one markdown file in document order and
//! parses the concatenated program. The program is never executed: once it
//! parses, the built-in extraction pipeline runs in its place.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, RunSummary, context::CommandContext, extract::run_extraction,
};
use crate::cli::RunCommand;
use crate::issues::SyntaxErrorIssue;
use crate::markdown::{FencedBlock, concat_blocks, locate_in_blocks, python_blocks};
use crate::python::{self, SyntaxError};

pub fn run_markdown(cmd: RunCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load()?;
    let source = ctx.runner_source(cmd.source.as_deref());

    let content = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;
    let blocks = python_blocks(&content);

    let mut summary = RunSummary {
        source,
        block_count: blocks.len(),
        syntax_error: None,
        emitted: None,
        extraction: None,
    };

    if blocks.is_empty() {
        return Ok(finish(summary, 0));
    }

    let program = concat_blocks(&blocks);
    if let Some(error) = python::check(&program) {
        summary.syntax_error = Some(map_error(&summary.source, &blocks, error));
        return Ok(finish(summary, 1));
    }

    if let Some(path) = cmd.emit {
        write_program(&path, &program)?;
        summary.emitted = Some(path);
    }

    summary.extraction = Some(run_extraction(&ctx, &cmd.args)?);
    Ok(finish(summary, 0))
}

fn finish(summary: RunSummary, error_count: usize) -> CommandResult {
    CommandResult {
        summary: CommandSummary::Run(summary),
        error_count,
        exit_on_errors: true,
    }
}

/// Translate a position in the concatenated program back to its block.
fn map_error(source: &Path, blocks: &[FencedBlock], error: SyntaxError) -> SyntaxErrorIssue {
    let (block_index, line) = locate_in_blocks(blocks, error.line).unwrap_or((blocks.len(), 1));
    let block = &blocks[block_index - 1];

    SyntaxErrorIssue {
        file_path: source.display().to_string(),
        block: block_index,
        line,
        col: error.col,
        file_line: block.start_line + line - 1,
        source_line: block.line(line).unwrap_or_default().to_string(),
        message: error.message,
    }
}

fn write_program(path: &Path, program: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", program))
        .with_context(|| format!("Failed to write {}", path.display()))
}
