use crate::commands::{CommandOutput, CommandResult};
use crate::game::Game;
use crate::success;

pub fn status(game: &mut Game) -> CommandResult<CommandOutput> {
    Ok(success!(game.player.status()))
}
