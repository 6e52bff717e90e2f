//! R1 region computation.

use super::letter::{is_boundary_consonant, is_vowel};

/// The region before R1 always covers at least this many letters.
pub const MIN_PREFIX: usize = 3;

/// Start index of R1, the region in which most suffixes may be removed.
///
/// R1 starts after the first vowel that is followed by a consonant, and never
/// before [`MIN_PREFIX`]. A word without such a transition has an empty R1
/// (the result equals its length). For words shorter than [`MIN_PREFIX`] the
/// result can exceed the length, which is also an empty region.
pub fn r1(word: &[char]) -> usize {
    (0..word.len().saturating_sub(1))
        .find(|&i| is_vowel(word, i) && is_boundary_consonant(word, i + 1))
        .map_or(word.len(), |i| (i + 1).max(MIN_PREFIX))
}
