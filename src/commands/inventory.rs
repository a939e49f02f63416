use crate::commands::{CommandOutput, CommandResult};
use crate::game::Game;
use crate::success;

pub fn inventory(game: &mut Game) -> CommandResult<CommandOutput> {
    Ok(success!(game.player.view_inventory()))
}
