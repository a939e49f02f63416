use crate::game::Game;
use crate::input::parser::{Verb, parse_command};
use thiserror::Error;

mod attack;
mod fallback;
mod go;
mod inventory;
mod locations;
mod look;
mod search;
mod status;
mod take;
mod talk;

pub type CommandResult<T> = Result<T, CommandError>;

/// Reasons a command is turned down. The message is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: \"{0}\". Type \"help\" for available commands.")]
    UnknownCommand(String),

    #[error("Game is over. Please refresh to start a new adventure.")]
    GameOver,

    #[error("There are no {0} here.")]
    NothingHere(&'static str),

    #[error("Cannot find {kind} \"{term}\". Available: {}", .available.join(", "))]
    NotFound {
        kind: &'static str,
        term: String,
        available: Vec<String>,
    },
}

/// Builds the error for a name that matched nothing in `available`.
pub(crate) fn not_found<'a>(
    kind: &'static str,
    term: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> CommandError {
    let available: Vec<String> = available.into_iter().map(str::to_string).collect();
    if available.is_empty() {
        return CommandError::NothingHere(kind);
    }
    CommandError::NotFound {
        kind,
        term: term.to_string(),
        available,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub message: String,
    pub is_error: bool,
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        $crate::commands::CommandOutput { is_error: false, message: $msg.to_string() }
    };
}

#[macro_export]
macro_rules! failure {
    ($msg:expr) => {
        $crate::commands::CommandOutput { is_error: true, message: $msg.to_string() }
    };
}

pub fn process_command(game: &mut Game, raw: &str) -> CommandOutput {
    if game.game_over {
        return failure!(CommandError::GameOver);
    }

    let intent = parse_command(raw);
    tracing::debug!(verb = intent.verb.as_str(), target = %intent.target, "command");

    let result = match intent.verb {
        Verb::Look => look::look(game),
        Verb::Search => search::search(game),
        Verb::Go => go::go(game, &intent),
        Verb::Take => take::take(game, &intent),
        Verb::Attack => attack::attack(game, &intent),
        Verb::Talk => talk::talk(game, &intent),
        Verb::Inventory => inventory::inventory(game),
        Verb::Status => status::status(game),
        Verb::Help => Ok(success!(help_text())),
        Verb::Locations => locations::locations(game),
        Verb::Custom(_) => fallback::fallback(&intent),
    };

    match result {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "command refused");
            failure!(e)
        }
    }
}

pub fn help_text() -> String {
    r#"
🗡️ SCRIPTORIA COMMANDS 🗡️

Movement:
• move [location] / go [location] - Travel to a connected location
• look / examine - Look around current location

Items:
• pick [item] / take [item] - Pick up an item
• search - Search for hidden items
• inventory / inv - View your inventory

Combat:
• attack [character] / fight [character] - Attack a character
• talk [character] / speak [character] - Talk to a character

Status:
• status / health - View your current status
• locations - List visited locations
• help - Show this help message

🎯 GOAL: Collect treasures and explore the mysterious land of Scriptoria!
"#
    .to_string()
}
