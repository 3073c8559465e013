// Probability-based letter selection over a dictionary of candidate words.
// Uses no_std and keeps the distribution in a fixed-size array.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    config::AI_TEMPERATURE,
    game::GameEngine,
    letters::{index_letter, letter_index, LetterSet, ALPHABET_LEN},
};
use rand::Rng;

/// Relative frequency of each letter in English text, used when no dictionary
/// word fits the board.
const ENGLISH_FREQ: [f64; ALPHABET_LEN] = [
    8.2, 1.5, 2.8, 4.3, 12.7, 2.2, 2.0, 6.1, 7.0, 0.15, 0.77, 4.0, 2.4, 6.7, 7.5, 1.9, 0.095,
    6.0, 6.3, 9.1, 2.8, 0.98, 2.4, 0.15, 2.0, 0.074,
];

/// Revealed letters of the engine's word, `None` for blanks.
pub fn word_pattern(engine: &GameEngine) -> Vec<Option<char>> {
    let guessed = engine.guessed_set();
    engine
        .word()
        .chars()
        .map(|c| guessed.contains(c).then_some(c))
        .collect()
}

/// Whether `candidate` could be the secret word given the revealed `pattern`
/// and the letters tried so far.
///
/// A guessed letter that occurs in the word is revealed at every position, so
/// a blank position can never hold a guessed letter.
pub fn matches_pattern(candidate: &str, pattern: &[Option<char>], guessed: &LetterSet) -> bool {
    if candidate.len() != pattern.len() {
        return false;
    }
    candidate.chars().zip(pattern).all(|(c, slot)| match slot {
        Some(shown) => c == *shown,
        None => !guessed.contains(c),
    })
}

/// Compute, for every letter, the share of candidate words that contain it.
/// Letters already guessed get zero. The result is normalized to sum to one
/// unless every letter has been guessed.
pub fn calc_pdf(
    pattern: &[Option<char>],
    guessed: &LetterSet,
    dictionary: &[String],
) -> [f64; ALPHABET_LEN] {
    let mut counts = [0.0f64; ALPHABET_LEN];
    let mut candidates = 0usize;

    for word in dictionary {
        if !matches_pattern(word, pattern, guessed) {
            continue;
        }
        candidates += 1;
        // Each candidate votes once per distinct letter.
        if let Ok(letters) = LetterSet::from_word(word) {
            for c in letters.difference(guessed).iter() {
                if let Ok(i) = letter_index(c) {
                    counts[i] += 1.0;
                }
            }
        }
    }

    if candidates == 0 {
        for (i, weight) in ENGLISH_FREQ.iter().enumerate() {
            if !guessed.contains(index_letter(i)) {
                counts[i] = *weight;
            }
        }
    }

    normalize(counts)
}

fn normalize(mut pdf: [f64; ALPHABET_LEN]) -> [f64; ALPHABET_LEN] {
    let total: f64 = pdf.iter().sum();
    if total == 0.0 {
        return pdf;
    }
    for v in pdf.iter_mut() {
        *v /= total;
    }
    pdf
}

/// Sample an unguessed letter from `pdf` using a temperature parameter.
/// Returns `None` only when every letter has been guessed.
pub fn sample_pdf<R: Rng + ?Sized>(
    pdf: &[f64; ALPHABET_LEN],
    guessed: &LetterSet,
    temperature: f64,
    rng: &mut R,
) -> Option<char> {
    let mut adjusted = [0.0f64; ALPHABET_LEN];
    let mut total = 0.0;
    for (i, &p) in pdf.iter().enumerate() {
        if guessed.contains(index_letter(i)) || p <= 0.0 {
            continue;
        }
        let v = libm::pow(p, 1.0 / temperature);
        adjusted[i] = v;
        total += v;
    }

    let open: Vec<char> = (!*guessed).iter().collect();
    if open.is_empty() {
        return None;
    }
    if total == 0.0 {
        return Some(open[rng.random_range(0..open.len())]);
    }

    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &v) in adjusted.iter().enumerate() {
        if v == 0.0 {
            continue;
        }
        cumulative += v;
        if threshold < cumulative {
            return Some(index_letter(i));
        }
    }
    // Rounding left the threshold past the last bucket.
    adjusted
        .iter()
        .rposition(|&v| v > 0.0)
        .map(index_letter)
}

/// Most likely unguessed letter according to `pdf`, ties broken
/// alphabetically.
pub fn best_letter(pdf: &[f64; ALPHABET_LEN], guessed: &LetterSet) -> Option<char> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in pdf.iter().enumerate() {
        if guessed.contains(index_letter(i)) {
            continue;
        }
        match best {
            Some((_, bp)) if bp >= p => {}
            _ => best = Some((i, p)),
        }
    }
    best.map(|(i, _)| index_letter(i))
}

/// Convenience wrapper: compute the distribution for `engine` and sample a
/// letter at the default temperature.
pub fn suggest<R: Rng + ?Sized>(
    engine: &GameEngine,
    dictionary: &[String],
    rng: &mut R,
) -> Option<char> {
    let guessed = engine.guessed_set();
    let pdf = calc_pdf(&word_pattern(engine), &guessed, dictionary);
    sample_pdf(&pdf, &guessed, AI_TEMPERATURE, rng)
}
