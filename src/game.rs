use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    common::{GameError, GuessOutcome},
    letters::LetterSet,
    roster::Roster,
    words::validate_word,
};

/// Snapshot of a round: the secret word and the letters guessed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub word: String,
    pub guessed: Vec<char>,
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Core game logic: the secret word, the guessed letters and the roster.
///
/// Every derived value is computed on demand from those three fields.
#[derive(Debug, Clone)]
pub struct GameEngine {
    word: String,
    word_letters: LetterSet,
    guessed: Vec<char>,
    guessed_set: LetterSet,
    roster: Roster,
}

impl GameEngine {
    /// Start a round with `word` as the secret.
    pub fn new(word: &str, roster: Roster) -> Result<Self, GameError> {
        validate_word(word)?;
        Ok(Self {
            word: String::from(word),
            word_letters: LetterSet::from_word(word)?,
            guessed: Vec::new(),
            guessed_set: LetterSet::new(),
            roster,
        })
    }

    /// Replace the secret word and forget all guesses.
    pub fn new_game(&mut self, word: &str) -> Result<(), GameError> {
        validate_word(word)?;
        self.word_letters = LetterSet::from_word(word)?;
        self.word.clear();
        self.word.push_str(word);
        self.guessed.clear();
        self.guessed_set = LetterSet::new();
        Ok(())
    }

    /// Submit a letter. Invalid letters are rejected; once the round is over,
    /// or if the letter was already tried, nothing changes.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.is_over() {
            return Ok(GuessOutcome::GameOver);
        }
        if !self.guessed_set.insert(letter)? {
            return Ok(GuessOutcome::Repeated);
        }
        self.guessed.push(letter);
        if self.word_letters.contains(letter) {
            Ok(GuessOutcome::Correct)
        } else {
            Ok(GuessOutcome::Wrong)
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Distinct letters of the secret word.
    pub fn word_letters(&self) -> LetterSet {
        self.word_letters
    }

    /// Guessed letters in the order they were played.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    /// Guessed letters as a set.
    pub fn guessed_set(&self) -> LetterSet {
        self.guessed_set
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Letters guessed this round that are not in the word.
    pub fn wrong_letters(&self) -> LetterSet {
        self.guessed_set.difference(&self.word_letters)
    }

    pub fn wrong_guess_count(&self) -> usize {
        self.wrong_letters().len()
    }

    pub fn max_wrong_guesses(&self) -> usize {
        self.roster.max_wrong_guesses()
    }

    /// Wrong guesses the player can still make before losing.
    pub fn attempts_left(&self) -> usize {
        self.max_wrong_guesses()
            .saturating_sub(self.wrong_guess_count())
    }

    pub fn is_won(&self) -> bool {
        self.word_letters.is_subset(&self.guessed_set)
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.max_wrong_guesses()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn last_guessed_letter(&self) -> Option<char> {
        self.guessed.last().copied()
    }

    pub fn is_last_guess_incorrect(&self) -> bool {
        self.last_guessed_letter()
            .is_some_and(|c| !self.word_letters.contains(c))
    }

    /// Take a snapshot of the round.
    pub fn state(&self) -> GameState {
        GameState {
            word: self.word.clone(),
            guessed: self.guessed.clone(),
        }
    }

    /// Rebuild an engine from a snapshot by replaying its guesses in order.
    /// Guesses past the end of the round are dropped, as they would be in play.
    pub fn from_state(state: &GameState, roster: Roster) -> Result<Self, GameError> {
        let mut engine = GameEngine::new(&state.word, roster)?;
        for &letter in &state.guessed {
            engine.guess(letter)?;
        }
        Ok(engine)
    }
}
