use crate::commands::{CommandOutput, CommandResult, not_found};
use crate::game::Game;
use crate::input::parser::{Intent, find_by_name};
use crate::success;

pub fn go(game: &mut Game, intent: &Intent) -> CommandResult<CommandOutput> {
    let from = game.current_location();
    let Some(exit) = find_by_name(&from.exits, &intent.target, |e| e.name.as_str()) else {
        return Err(not_found(
            "locations",
            &intent.target,
            from.exits.iter().map(|e| e.name.as_str()),
        ));
    };

    tracing::info!(from = %from.name, to = %exit.name, "player moves");
    let to = exit.to;
    game.current = to;

    Ok(success!(game.current_location_mut().enter_location()))
}
