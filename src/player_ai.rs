use alloc::string::String;
use alloc::vec::Vec;

use crate::{ai, session::Session, words::WordList};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Simple AI player that guesses letters by their likelihood across a
/// dictionary.
pub struct AiPlayer {
    dictionary: Vec<String>,
}

impl AiPlayer {
    pub fn new(dictionary: &WordList) -> Self {
        Self {
            dictionary: dictionary.words().to_vec(),
        }
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }
}

impl Player for AiPlayer {
    fn select_letter(&mut self, rng: &mut SmallRng, session: &Session) -> Option<char> {
        ai::suggest(session.engine(), &self.dictionary, rng)
    }
}
