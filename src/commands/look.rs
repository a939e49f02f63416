use crate::commands::{CommandOutput, CommandResult};
use crate::game::Game;
use crate::success;

pub fn look(game: &mut Game) -> CommandResult<CommandOutput> {
    Ok(success!(game.current_location_mut().enter_location()))
}
