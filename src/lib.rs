pub mod ansi;
pub mod commands;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod input;
pub mod models;
pub mod world;

// Convenient re-exports (so call sites can do `scriptoria::Game`, etc.)
pub use commands::{CommandOutput, process_command};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use game::Game;
