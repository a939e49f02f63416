use crate::commands::{CommandOutput, CommandResult, not_found};
use crate::game::Game;
use crate::input::parser::{Intent, find_by_name};
use crate::success;

pub fn talk(game: &mut Game, intent: &Intent) -> CommandResult<CommandOutput> {
    let alive = game.current_location().alive_characters();
    let Some(character) = find_by_name(alive.iter().copied(), &intent.target, |c| c.name.as_str()) else {
        return Err(not_found(
            "characters",
            &intent.target,
            alive.iter().map(|c| c.name.as_str()),
        ));
    };

    Ok(success!(match &character.dialogue {
        Some(line) => line.clone(),
        None => format!("{} looks at you but says nothing.", character.name),
    }))
}
