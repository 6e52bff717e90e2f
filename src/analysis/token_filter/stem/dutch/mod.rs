//! Dutch stemming algorithm.
//!
//! A rule-based suffix stripper that reduces inflected Dutch words to a
//! common stem for matching: plurals, diminutives, comparatives and
//! superlatives all collapse onto the same form. The result is not
//! guaranteed to be a dictionary word.
//!
//! # Algorithm
//!
//! Exactly one family of suffixes is removed, tried in this order:
//! 1. Diminutives: -inkje, -'tje, -etje, -jes, -pje, -tje, -je
//! 2. Comparatives and superlatives: -der, -ere, -ëre, -ër, -er, -est, -st
//! 3. Standard suffixes: -heden, -ene, -ën, -en, -se, -'s, -s, then a final -e
//!
//! Standard suffixes (except -'s) must lie in R1, the region after the first
//! vowel followed by a consonant (and never in the first three letters).
//! Every word then goes through doubling normalization: a doubled final
//! consonant is collapsed ("bakk" → "bak") and a doubled long vowel in a
//! closed final syllable is written single ("maan" → "man").
//!
//! # Examples
//!
//! ```
//! use wortel::analysis::token_filter::stem::Stemmer;
//! use wortel::analysis::token_filter::stem::dutch::DutchStemmer;
//!
//! let stemmer = DutchStemmer::new();
//!
//! assert_eq!(stemmer.stem("mogelijkheden"), "mogelijkheid");
//! assert_eq!(stemmer.stem("kettinkje"), "ketting");
//! assert_eq!(stemmer.stem("lekkerder"), "lekker");
//! ```

mod buffer;
pub mod degree;
pub mod diminutive;
pub mod letter;
pub mod region;
pub mod standard;
pub mod suffix;
pub mod undouble;

use crate::analysis::token_filter::stem::Stemmer;

use self::buffer::StemBuffer;

/// Reduce a single lowercase Dutch word to its stem.
///
/// Total and side-effect free: words that match no rule come back unchanged
/// apart from doubling normalization.
pub fn stem(word: &str) -> String {
    let mut buffer = StemBuffer::new(word);

    if !diminutive::resolve(&mut buffer) && !degree::resolve(&mut buffer) {
        standard::resolve(&mut buffer);
    }

    buffer.normalize();
    buffer.into_string()
}

/// Dutch stemmer for use in a [`StemFilter`](super::StemFilter).
#[derive(Debug, Clone, Copy, Default)]
pub struct DutchStemmer;

impl DutchStemmer {
    /// Create a new Dutch stemmer.
    pub fn new() -> Self {
        DutchStemmer
    }
}

impl Stemmer for DutchStemmer {
    fn stem(&self, word: &str) -> String {
        stem(word)
    }

    fn name(&self) -> &'static str {
        "dutch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stem::dutch::diminutive::DIMINUTIVE_SUFFIXES;
    use crate::analysis::token_filter::stem::dutch::degree::{
        COMPARATIVE_SUFFIXES, SUPERLATIVE_SUFFIXES,
    };
    use crate::analysis::token_filter::stem::dutch::standard::STANDARD_SUFFIXES;
    use crate::analysis::token_filter::stem::dutch::suffix::SuffixRule;

    #[test]
    fn test_dutch_stemmer() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("vrouwen"), "vrouw");
        assert_eq!(stemmer.stem("bakken"), "bak");
        assert_eq!(stemmer.stem("maan"), "man");
        assert_eq!(stemmer.stem("kostuumpje"), "kostum");
        assert_eq!(stemmer.stem("schaapjes"), "schap");
        assert_eq!(stemmer.stem("warmst"), "warm");
        assert_eq!(stemmer.stem("allergieën"), "allergie");
    }

    #[test]
    fn test_only_one_family_fires() {
        // The diminutive is removed; the -en family is not tried afterwards.
        assert_eq!(stem("vrouwtje"), "vrouw");
        // The comparative is removed; the remaining "lekker" keeps its -er.
        assert_eq!(stem("lekkerder"), "lekker");
    }

    #[test]
    fn test_trailing_e_is_undoubled() {
        assert_eq!(stem("witte"), "wit");
    }

    #[test]
    fn test_short_and_empty_words() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("zo"), "zo");
        assert_eq!(stem("'s"), "'s");
    }

    #[test]
    fn test_tables_are_longest_first() {
        let tables: [&[SuffixRule]; 4] = [
            DIMINUTIVE_SUFFIXES,
            COMPARATIVE_SUFFIXES,
            SUPERLATIVE_SUFFIXES,
            STANDARD_SUFFIXES,
        ];
        for table in tables {
            for pair in table.windows(2) {
                assert!(
                    pair[0].char_len() >= pair[1].char_len(),
                    "{} listed before {}",
                    pair[0].literal,
                    pair[1].literal
                );
            }
        }
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(DutchStemmer::new().name(), "dutch");
    }
}
