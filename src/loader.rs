#![cfg(feature = "std")]

//! Loading word lists and rosters from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::{
    roster::{Language, Roster},
    words::WordList,
};

/// Parse a word list: one word per line, blank lines and `#` comments skipped.
pub fn parse_word_list(text: &str) -> anyhow::Result<WordList> {
    let words = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));
    WordList::new(words).map_err(|e| anyhow::anyhow!(e))
}

pub fn load_word_list(path: &Path) -> anyhow::Result<WordList> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    let list = parse_word_list(&text)
        .with_context(|| format!("parsing word list {}", path.display()))?;
    log::info!("loaded {} words from {}", list.len(), path.display());
    Ok(list)
}

/// Parse a roster from a JSON array of `{ name, backgroundColor, color }`.
pub fn parse_roster(json: &str) -> anyhow::Result<Roster> {
    let languages: Vec<Language> = serde_json::from_str(json)?;
    Roster::new(languages).map_err(|e| anyhow::anyhow!(e))
}

pub fn load_roster(path: &Path) -> anyhow::Result<Roster> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let roster =
        parse_roster(&text).with_context(|| format!("parsing roster {}", path.display()))?;
    log::info!("loaded {} languages from {}", roster.len(), path.display());
    Ok(roster)
}
