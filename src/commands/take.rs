use crate::commands::{CommandError, CommandOutput, CommandResult, not_found};
use crate::game::{Game, TREASURES_TO_WIN};
use crate::input::parser::{Intent, find_by_name};
use crate::models::item::ItemKind;
use crate::success;

const VICTORY_BANNER: &str = "\n\n🎉 CONGRATULATIONS! You have collected enough treasures and won the game! 🎉";

pub fn take(game: &mut Game, intent: &Intent) -> CommandResult<CommandOutput> {
    let location = game.current_location_mut();
    let Some(id) = find_by_name(&location.items, &intent.target, |i| i.name.as_str()).map(|i| i.id) else {
        return Err(not_found("items", &intent.target, location.item_names()));
    };
    let item = location.remove_item(id).ok_or(CommandError::NothingHere("items"))?;

    let kind = item.kind;
    let mut message = game.player.pick_up_item(item);

    if kind == ItemKind::Treasure {
        game.treasures_found += 1;
        tracing::info!(treasures = game.treasures_found, "treasure collected");

        if game.treasures_found >= TREASURES_TO_WIN {
            game.game_won = true;
            game.game_over = true;
            tracing::info!("game won");
            message.push_str(VICTORY_BANNER);
        }
    }

    Ok(success!(message))
}
