use crate::commands::{CommandError, CommandOutput, CommandResult};
use crate::input::parser::Intent;

pub fn fallback(intent: &Intent) -> CommandResult<CommandOutput> {
    Err(CommandError::UnknownCommand(intent.original.clone()))
}
