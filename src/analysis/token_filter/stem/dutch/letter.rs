//! Letter classification for Dutch words.
//!
//! Every letter has a base class from a fixed vowel table. Suffix checks use
//! a second, positional class in which a glide (an `i` or `u` directly after
//! a vowel, as in "groeien" or "vrouw") counts as a consonant.

/// Whether a letter behaves as a vowel or a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// Letters that are vowels before any positional override.
const VOWELS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'y', 'ë'];

/// Base class of a single letter.
pub fn letter_class(c: char) -> LetterClass {
    if VOWELS.contains(&c) {
        LetterClass::Vowel
    } else {
        LetterClass::Consonant
    }
}

/// Base class of the letter at `i`.
///
/// Positions past the end of the word report `Consonant`.
pub fn classify(word: &[char], i: usize) -> LetterClass {
    word.get(i)
        .map_or(LetterClass::Consonant, |&c| letter_class(c))
}

/// Returns `true` if the letter at `i` is a base vowel.
pub fn is_vowel(word: &[char], i: usize) -> bool {
    classify(word, i) == LetterClass::Vowel
}

/// Class of the letter at `i` when it borders a suffix.
///
/// Identical to [`classify`] except that an `i` or `u` preceded by a base
/// vowel is a glide and reports `Consonant`.
pub fn boundary_class(word: &[char], i: usize) -> LetterClass {
    match word.get(i) {
        Some('i' | 'u') if i > 0 && is_vowel(word, i - 1) => LetterClass::Consonant,
        _ => classify(word, i),
    }
}

/// Returns `true` if the letter at `i` closes a suffix boundary as a consonant.
pub fn is_boundary_consonant(word: &[char], i: usize) -> bool {
    boundary_class(word, i) == LetterClass::Consonant
}
