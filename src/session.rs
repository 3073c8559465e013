//! A sequence of rounds sharing one roster and one word source.

use alloc::boxed::Box;
use alloc::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{GameError, GuessOutcome},
    game::{GameEngine, GameStatus},
    player::Player,
    roster::Roster,
    words::WordSource,
};

/// Game engine plus the collaborators needed to start new rounds and to
/// phrase farewell messages.
pub struct Session {
    engine: GameEngine,
    source: Box<dyn WordSource>,
    farewell: Option<String>,
}

impl Session {
    /// Start the first round with a word drawn from `source`.
    pub fn new(
        source: Box<dyn WordSource>,
        roster: Roster,
        rng: &mut SmallRng,
    ) -> Result<Self, GameError> {
        let word = source.random_word(rng);
        let engine = GameEngine::new(&word, roster)?;
        log::debug!("new round, {} letters", word.len());
        Ok(Self {
            engine,
            source,
            farewell: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Farewell message for the language the last guess eliminated. Cleared
    /// once a guess is correct or the round ends.
    pub fn farewell(&self) -> Option<&str> {
        self.farewell.as_deref()
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Forward a guess to the engine and refresh the farewell message.
    pub fn guess(&mut self, letter: char, rng: &mut SmallRng) -> Result<GuessOutcome, GameError> {
        let outcome = self.engine.guess(letter)?;
        log::debug!("guess '{}' -> {:?}", letter, outcome);
        match outcome {
            GuessOutcome::Wrong if !self.engine.is_over() => {
                self.farewell = self
                    .engine
                    .last_eliminated()
                    .map(|lang| self.source.farewell_text(&lang.name, rng));
            }
            GuessOutcome::Correct | GuessOutcome::Wrong => self.farewell = None,
            GuessOutcome::Repeated | GuessOutcome::GameOver => {}
        }
        if outcome.is_recorded() && self.engine.is_over() {
            log::info!(
                "round over: {:?}, word '{}', {} wrong guesses",
                self.engine.status(),
                self.engine.word(),
                self.engine.wrong_guess_count()
            );
        }
        Ok(outcome)
    }

    /// Draw a fresh word and clear the guesses.
    pub fn new_game(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        let word = self.source.random_word(rng);
        self.engine.new_game(&word)?;
        self.farewell = None;
        log::debug!("new round, {} letters", word.len());
        Ok(())
    }

    /// Ask `player` for letters until the round is over or the player gives
    /// up. Returns the status at that point.
    pub fn play_round(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<GameStatus, GameError> {
        while !self.engine.is_over() {
            let Some(letter) = player.select_letter(rng, self) else {
                log::info!("player left the round");
                break;
            };
            let outcome = self.guess(letter, rng)?;
            player.handle_guess_result(letter, outcome);
        }
        Ok(self.engine.status())
    }
}
