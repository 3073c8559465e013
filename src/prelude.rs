//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, GameEngine, GameError, GameState, GameStatus, GuessOutcome, Player, Roster,
    Session, WordList, WordSource,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::print_game_view, CliPlayer};
