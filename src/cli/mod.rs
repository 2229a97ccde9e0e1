use anyhow::Result;

pub use args::{Arguments, Command, ExtractArgs, ExtractCommand, RunCommand, ValidateCommand};
pub use exit_status::ExitStatus;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status())
}
