use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{dump::dump, init::init},
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to report and the exit status
/// - `Err` if the command fails (invalid config, unwritable output, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
