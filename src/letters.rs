//! A compact set of lowercase ASCII letters.
//!
//! Letters `a..=z` map to bits 0..26 of a `u32`, so membership, union and
//! difference are single integer operations and the type stays `Copy`.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use crate::common::GameError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

const FULL: u32 = (1 << ALPHABET_LEN) - 1;

/// Bit index of a lowercase letter.
#[inline]
pub fn letter_index(letter: char) -> Result<usize, GameError> {
    if letter.is_ascii_lowercase() {
        Ok((letter as u8 - b'a') as usize)
    } else {
        Err(GameError::InvalidLetter(letter))
    }
}

/// Letter for a bit index in `0..26`.
#[inline]
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'a' + index as u8) as char
}

/// Set of letters from `a` to `z`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        LetterSet { bits: 0 }
    }

    /// Set holding every letter of the alphabet.
    #[inline]
    pub const fn full() -> Self {
        LetterSet { bits: FULL }
    }

    /// Collect the distinct letters of `word`. Fails on the first character
    /// outside `a..=z`.
    pub fn from_word(word: &str) -> Result<Self, GameError> {
        let mut set = LetterSet::new();
        for c in word.chars() {
            set.insert(c)?;
        }
        Ok(set)
    }

    /// Insert `letter`, returning `true` if it was not already present.
    pub fn insert(&mut self, letter: char) -> Result<bool, GameError> {
        let bit = 1u32 << letter_index(letter)?;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        Ok(fresh)
    }

    /// Membership test. Characters outside `a..=z` are never members.
    #[inline]
    pub fn contains(&self, letter: char) -> bool {
        match letter_index(letter) {
            Ok(i) => self.bits & (1u32 << i) != 0,
            Err(_) => false,
        }
    }

    /// Number of letters in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// `true` when every letter of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Letters in `self` but not in `other`.
    #[inline]
    pub fn difference(&self, other: &LetterSet) -> LetterSet {
        LetterSet { bits: self.bits & !other.bits }
    }

    /// Iterate letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> {
        let bits = self.bits;
        (0..ALPHABET_LEN)
            .filter(move |&i| bits & (1u32 << i) != 0)
            .map(index_letter)
    }
}

impl BitAnd for LetterSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        LetterSet { bits: self.bits & rhs.bits }
    }
}

impl BitOr for LetterSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        LetterSet { bits: self.bits | rhs.bits }
    }
}

impl Not for LetterSet {
    type Output = Self;
    fn not(self) -> Self {
        LetterSet { bits: !self.bits & FULL }
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LetterSet {")?;
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        f.write_str("}")
    }
}
