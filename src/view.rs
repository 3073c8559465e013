//! Display models derived from a [`GameEngine`].
//!
//! Nothing here holds state of its own; every view is rebuilt from the engine
//! whenever the screen is drawn.

use alloc::vec::Vec;

use crate::{
    config::ALPHABET,
    game::GameEngine,
    roster::Language,
};

/// One position of the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    pub letter: char,
    /// Shown to the player: guessed, or the round was lost.
    pub revealed: bool,
    /// Revealed only because the round was lost.
    pub missed: bool,
}

impl LetterSlot {
    /// Uppercased letter when revealed, `None` for a blank slot.
    pub fn display(&self) -> Option<char> {
        self.revealed.then(|| self.letter.to_ascii_uppercase())
    }
}

/// A roster entry and whether a wrong guess has struck it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip<'a> {
    pub language: &'a Language,
    pub eliminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// One keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: char,
    pub state: KeyState,
    pub guessed: bool,
    /// The whole keyboard is disabled once the round is over.
    pub disabled: bool,
}

/// Status line above the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBanner<'a> {
    Empty,
    /// Last guess was wrong and the round continues; names the language just
    /// eliminated.
    Farewell(&'a Language),
    Won,
    Lost,
}

impl GameEngine {
    pub fn letter_slots(&self) -> Vec<LetterSlot> {
        let lost = self.is_lost();
        let guessed = self.guessed_set();
        self.word()
            .chars()
            .map(|letter| {
                let hit = guessed.contains(letter);
                LetterSlot {
                    letter,
                    revealed: lost || hit,
                    missed: lost && !hit,
                }
            })
            .collect()
    }

    /// Roster entries in order; the first `wrong_guess_count` are eliminated.
    pub fn chips(&self) -> Vec<Chip<'_>> {
        let wrong = self.wrong_guess_count();
        self.roster()
            .iter()
            .enumerate()
            .map(|(i, language)| Chip {
                language,
                eliminated: i < wrong,
            })
            .collect()
    }

    pub fn keyboard(&self) -> Vec<Key> {
        let over = self.is_over();
        let guessed = self.guessed_set();
        let word = self.word_letters();
        ALPHABET
            .chars()
            .map(|letter| {
                let is_guessed = guessed.contains(letter);
                let state = match (is_guessed, word.contains(letter)) {
                    (false, _) => KeyState::Unused,
                    (true, true) => KeyState::Correct,
                    (true, false) => KeyState::Wrong,
                };
                Key {
                    letter,
                    state,
                    guessed: is_guessed,
                    disabled: over,
                }
            })
            .collect()
    }

    /// The language eliminated by the most recent wrong guess, if any.
    pub fn last_eliminated(&self) -> Option<&Language> {
        self.wrong_guess_count()
            .checked_sub(1)
            .and_then(|i| self.roster().get(i))
    }

    pub fn banner(&self) -> StatusBanner<'_> {
        if self.is_won() {
            return StatusBanner::Won;
        }
        if self.is_lost() {
            return StatusBanner::Lost;
        }
        if self.is_last_guess_incorrect() {
            if let Some(lang) = self.last_eliminated() {
                return StatusBanner::Farewell(lang);
            }
        }
        StatusBanner::Empty
    }
}
