use crate::{common::GuessOutcome, session::Session};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next letter to guess, or `None` to abandon the round.
    fn select_letter(&mut self, rng: &mut SmallRng, session: &Session) -> Option<char>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _letter: char, _outcome: GuessOutcome) {}
}
