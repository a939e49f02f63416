use crate::commands::{CommandOutput, CommandResult};
use crate::game::Game;
use crate::success;

pub fn search(game: &mut Game) -> CommandResult<CommandOutput> {
    let Game { locations, current, dice, .. } = game;
    let location = &mut locations[current.0];

    Ok(success!(location.search_location(dice.as_mut())))
}
