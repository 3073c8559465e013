//! The roster of programming languages standing in for the player's lives.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::GameError;
use crate::config::STANDARD_LANGUAGES;

/// One roster entry: a language name and the colors of its chip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Language {
    pub name: String,
    pub background_color: String,
    pub color: String,
}

impl Language {
    pub fn new(name: &str, background_color: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            background_color: background_color.to_string(),
            color: color.to_string(),
        }
    }

    /// Background color as an RGB triple.
    pub fn background_rgb(&self) -> Result<(u8, u8, u8), GameError> {
        parse_hex_color(&self.background_color)
    }

    /// Text color as an RGB triple.
    pub fn color_rgb(&self) -> Result<(u8, u8, u8), GameError> {
        parse_hex_color(&self.color)
    }
}

/// Parse a `#RRGGBB` color.
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), GameError> {
    let hex = s.strip_prefix('#').ok_or(GameError::InvalidColor)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(GameError::InvalidColor);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| GameError::InvalidColor)
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Ordered, read-only list of languages. Its length minus one is the number
/// of wrong guesses a player may make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    languages: Vec<Language>,
}

impl Roster {
    /// Build a roster, checking it has at least two entries with valid colors.
    pub fn new(languages: Vec<Language>) -> Result<Self, GameError> {
        if languages.len() < 2 {
            return Err(GameError::RosterTooShort(languages.len()));
        }
        for lang in &languages {
            lang.background_rgb()?;
            lang.color_rgb()?;
        }
        Ok(Self { languages })
    }

    /// The nine-language roster the game ships with.
    pub fn standard() -> Self {
        let languages = STANDARD_LANGUAGES
            .iter()
            .map(|&(name, bg, fg)| Language::new(name, bg, fg))
            .collect();
        Self { languages }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Language> {
        self.languages.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Wrong guesses allowed before the round is lost.
    pub fn max_wrong_guesses(&self) -> usize {
        self.languages.len() - 1
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::standard()
    }
}
