//! Secret word and farewell text sources.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::common::GameError;
use crate::config::{BUILTIN_WORDS, FAREWELL_TEMPLATES};
use crate::letters::LetterSet;

/// Supplies secret words and the flavor text shown when a language falls.
pub trait WordSource {
    /// Draw the secret word for a new round. Always lowercase `a..=z`.
    fn random_word(&self, rng: &mut SmallRng) -> String;

    /// Message shown after a wrong guess eliminates `language`.
    fn farewell_text(&self, language: &str, rng: &mut SmallRng) -> String {
        let template = FAREWELL_TEMPLATES
            .choose(rng)
            .copied()
            .unwrap_or(FAREWELL_TEMPLATES[0]);
        template.replace("{}", language)
    }
}

/// Check that `word` is a non-empty run of lowercase ASCII letters.
pub fn validate_word(word: &str) -> Result<(), GameError> {
    if word.is_empty() {
        return Err(GameError::EmptyWord);
    }
    LetterSet::from_word(word).map_err(|_| GameError::InvalidWord)?;
    Ok(())
}

/// A validated, non-empty list of candidate secret words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from `words`, lowercasing each one. Fails if the list is
    /// empty or any word has characters outside `a..=z`.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for w in words {
            let word = w.as_ref().trim().to_ascii_lowercase();
            validate_word(&word)?;
            list.push(word);
        }
        if list.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words: list })
    }

    /// The words bundled with the game.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn random_word(&self, rng: &mut SmallRng) -> String {
        // `new` and `builtin` never produce an empty list.
        self.words.choose(rng).cloned().unwrap_or_default()
    }
}
