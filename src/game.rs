use crate::commands::{self, CommandOutput};
use crate::dice::Dice;
use crate::error::AppResult;
use crate::models::character::Character;
use crate::models::location::Location;
use crate::models::types::LocationId;
use crate::world;

/// Number of treasures the player needs to win
pub const TREASURES_TO_WIN: u32 = 2;

/// The whole state of one adventure.
///
/// There is no global game: the shell creates one, keeps it, and feeds it
/// commands one at a time. Every command runs to completion before the next.
pub struct Game {
    pub(crate) player: Character,
    pub(crate) locations: Vec<Location>,
    pub(crate) current: LocationId,
    pub(crate) game_over: bool,
    pub(crate) game_won: bool,
    pub(crate) treasures_found: u32,
    pub(crate) enemies_defeated: u32,
    pub(crate) dice: Box<dyn Dice>,
}

impl Game {
    /// Builds the world. The player has not entered it yet; call
    /// [`Game::initialize_game`] for the opening narration.
    pub fn new(dice: impl Dice + 'static) -> AppResult<Self> {
        let world = world::build()?;
        Ok(Self {
            player: world.player,
            locations: world.locations,
            current: world.start,
            game_over: false,
            game_won: false,
            treasures_found: 0,
            enemies_defeated: 0,
            dice: Box::new(dice),
        })
    }

    /// Resets everything to a fresh world and enters the starting location.
    /// The dice are kept.
    pub fn initialize_game(&mut self) -> AppResult<String> {
        let world = world::build()?;
        self.player = world.player;
        self.locations = world.locations;
        self.current = world.start;
        self.game_over = false;
        self.game_won = false;
        self.treasures_found = 0;
        self.enemies_defeated = 0;

        tracing::info!(location = %self.current_location().name, "adventure started");
        Ok(self.current_location_mut().enter_location())
    }

    pub fn process_command(&mut self, raw: &str) -> String {
        self.process(raw).message
    }

    /// Like [`Game::process_command`], but also tells whether the command was
    /// refused.
    pub fn process(&mut self, raw: &str) -> CommandOutput {
        commands::process_command(self, raw)
    }

    pub fn game_status(&self) -> String {
        format!(
            "{} | Treasures: {} | Enemies Defeated: {}",
            self.player.status(),
            self.treasures_found,
            self.enemies_defeated
        )
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.game_won
    }

    pub fn treasures_found(&self) -> u32 {
        self.treasures_found
    }

    pub fn enemies_defeated(&self) -> u32 {
        self.enemies_defeated
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn current_location(&self) -> &Location {
        &self.locations[self.current.0]
    }

    pub(crate) fn current_location_mut(&mut self) -> &mut Location {
        &mut self.locations[self.current.0]
    }
}
