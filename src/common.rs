//! Common types for the game: guess outcomes and game errors.

/// Result of submitting a letter to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// Letter occurs in the secret word.
    Correct,
    /// Letter does not occur in the secret word; one language is eliminated.
    Wrong,
    /// Letter was already guessed this round. State is unchanged.
    Repeated,
    /// Round is already won or lost. State is unchanged.
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess changed the engine state.
    pub fn is_recorded(&self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Wrong)
    }
}

/// Errors returned by engine, roster and word list constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guessed character is not a lowercase ASCII letter.
    InvalidLetter(char),
    /// Secret word is empty.
    EmptyWord,
    /// Secret word contains something other than `a..=z`.
    InvalidWord,
    /// Roster must hold at least two languages; carries the actual length.
    RosterTooShort(usize),
    /// Roster color is not in `#RRGGBB` form.
    InvalidColor,
    /// Word list has no usable words.
    EmptyWordList,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLetter(c) => write!(f, "'{}' is not a letter from a to z", c),
            GameError::EmptyWord => write!(f, "Secret word is empty"),
            GameError::InvalidWord => write!(f, "Secret word may only contain letters a-z"),
            GameError::RosterTooShort(n) => {
                write!(f, "Roster needs at least 2 languages, got {}", n)
            }
            GameError::InvalidColor => write!(f, "Color must be written as #RRGGBB"),
            GameError::EmptyWordList => write!(f, "Word list contains no words"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
