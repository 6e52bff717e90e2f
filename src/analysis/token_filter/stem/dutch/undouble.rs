//! Doubling normalization at the end of a word.

use super::letter::{LetterClass, letter_class};

/// Vowels whose long sound is spelled double in a closed syllable.
const LONG_VOWELS: [char; 4] = ['a', 'e', 'o', 'u'];

fn is_consonant(c: char) -> bool {
    letter_class(c) == LetterClass::Consonant
}

/// Drop the last letter when the word ends in two identical consonants
/// ("bakk" → "bak"). Returns `true` if the word changed.
pub fn undouble_consonant(word: &mut Vec<char>) -> bool {
    let n = word.len();
    if n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word[n - 1]) {
        word.pop();
        return true;
    }
    false
}

/// Collapse a doubled long vowel in a closed final syllable
/// ("maan" → "man", "kostuum" → "kostum").
///
/// Only fires on a consonant, vowel, vowel, consonant ending; a word-final
/// double vowel ("tevree") is left alone. Returns `true` if the word changed.
pub fn undouble_vowel(word: &mut Vec<char>) -> bool {
    let n = word.len();
    if n < 4 {
        return false;
    }

    let (before, vowel, after) = (word[n - 4], word[n - 3], word[n - 1]);
    if word[n - 2] == vowel
        && LONG_VOWELS.contains(&vowel)
        && is_consonant(before)
        && is_consonant(after)
    {
        word.remove(n - 2);
        return true;
    }
    false
}
