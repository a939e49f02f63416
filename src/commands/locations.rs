use crate::commands::{CommandOutput, CommandResult};
use crate::game::Game;
use crate::success;

/// How much of a description the overview shows
const EXCERPT_CHARS: usize = 60;

pub fn locations(game: &mut Game) -> CommandResult<CommandOutput> {
    let visited: Vec<String> = game
        .locations
        .iter()
        .filter(|l| l.visited)
        .map(|l| {
            let excerpt: String = l.description.chars().take(EXCERPT_CHARS).collect();
            format!("• {} - {}...", l.name, excerpt)
        })
        .collect();

    if visited.is_empty() {
        return Ok(success!("You have not yet explored any locations."));
    }

    Ok(success!(format!("Visited locations:\n{}", visited.join("\n"))))
}
