use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, fix::fix, init::init, pseudo::pseudo},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and problem count
/// - `Err` if the command fails (e.g., unreadable files, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Fix(cmd)) => fix(cmd),
        Some(Command::Init) => init(),
        Some(Command::Pseudo(cmd)) => Ok(pseudo(cmd)),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
