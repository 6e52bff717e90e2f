//! Comparative (-er, -ere, -der, -ër) and superlative (-st, -est) suffixes.

use super::buffer::StemBuffer;
use super::suffix::{Condition, Selection, SuffixRule};

/// Comparative endings, longest first.
///
/// `-der` follows a stem in `r` ("lekkerder"); the diaeresis forms follow a
/// stem ending in a vowel ("tevreeër").
pub static COMPARATIVE_SUFFIXES: &[SuffixRule] = &[
    SuffixRule::strip("der", Condition::Letter('r')),
    SuffixRule::strip("ere", Condition::Consonant),
    SuffixRule::strip("ëre", Condition::Vowel),
    SuffixRule::strip("ër", Condition::Vowel),
    SuffixRule::strip("er", Condition::Consonant),
];

/// Superlative endings, longest first.
pub static SUPERLATIVE_SUFFIXES: &[SuffixRule] = &[
    SuffixRule::strip("est", Condition::VowelExcept('e')),
    SuffixRule::strip("st", Condition::LetterOrConsonant('e')),
];

/// Strip a comparative suffix, or failing that a superlative one.
/// Returns `true` if either was found.
pub(crate) fn resolve(buffer: &mut StemBuffer) -> bool {
    buffer
        .resolve(COMPARATIVE_SUFFIXES, Selection::FirstEligible)
        .or_else(|| buffer.resolve(SUPERLATIVE_SUFFIXES, Selection::FirstEligible))
        .is_some()
}
