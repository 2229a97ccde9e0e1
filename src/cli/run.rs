use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, extract::extract, init::init, runner::run_markdown, validate::validate,
    },
};
use anyhow::{Result, bail};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and error count
/// - `Err` if the command could not run (unreadable config, I/O failure, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Run(cmd)) => run_markdown(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
