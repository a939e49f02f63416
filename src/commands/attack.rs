use crate::commands::{CommandError, CommandOutput, CommandResult, not_found};
use crate::game::Game;
use crate::input::parser::{Intent, find_by_name};
use crate::models::character::Behavior;
use crate::{success, world};

/// Chance that a defeated enemy leaves something behind
const DROP_CHANCE: f64 = 0.6;
const DEFEAT_BANNER: &str = "\n\n💀 GAME OVER! Your adventure ends here... 💀";

pub fn attack(game: &mut Game, intent: &Intent) -> CommandResult<CommandOutput> {
    let alive = game.current_location().alive_characters();
    let Some(target) = find_by_name(alive.iter().copied(), &intent.target, |c| c.name.as_str()) else {
        return Err(not_found(
            "targets",
            &intent.target,
            alive.iter().map(|c| c.name.as_str()),
        ));
    };

    if let Behavior::Peaceful { refusal } = &target.behavior {
        return Ok(success!(refusal));
    }
    let target_id = target.id;

    let Game {
        player,
        locations,
        current,
        dice,
        game_over,
        enemies_defeated,
        ..
    } = game;
    let location = &mut locations[current.0];
    let target = location
        .characters
        .iter_mut()
        .find(|c| c.id == target_id)
        .ok_or(CommandError::NothingHere("targets"))?;

    let mut result = player.attack(target, dice.as_mut()).text;

    if target.is_alive {
        // Whoever survives the blow strikes back in the same turn
        result.push('\n');
        result.push_str(&target.attack(player, dice.as_mut()).text);

        if !player.is_alive {
            *game_over = true;
            tracing::info!(killer = %target.name, "player defeated");
            result.push_str(DEFEAT_BANNER);
        }
        return Ok(success!(result));
    }

    let name = target.name.clone();
    *enemies_defeated += 1;
    tracing::info!(enemy = %name, defeated = *enemies_defeated, "enemy defeated");
    result.push_str(&format!("\n{name} has been defeated!"));

    if dice.chance(DROP_CHANCE) {
        let mut drops = world::combat_drops();
        let dropped = drops.swap_remove(dice.pick(drops.len()));
        result.push_str(&format!("\n{name} dropped {}!", dropped.name));
        location.add_item(dropped);
    }

    Ok(success!(result))
}
