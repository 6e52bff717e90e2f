//! Inflectional suffixes: plural and verbal -en, -s, -heden, and a final -e.

use super::buffer::StemBuffer;
use super::suffix::{Condition, Selection, SuffixRule};

/// Stems ending in this text keep their `-en`/`-ene`.
const EN_EXCLUDED_STEM: &str = "gem";

/// Standard endings, longest first. Only the longest literal that matches is
/// considered.
pub static STANDARD_SUFFIXES: &[SuffixRule] = &[
    SuffixRule::replace("heden", "heid", Condition::Always)
        .in_r1()
        .then_e(),
    SuffixRule::strip("ene", Condition::ConsonantNotAfter(EN_EXCLUDED_STEM))
        .in_r1()
        .undouble()
        .then_e(),
    // The diaeresis already marks the boundary after a vowel-final stem.
    SuffixRule::strip("ën", Condition::Always).in_r1(),
    SuffixRule::strip("en", Condition::ConsonantNotAfter(EN_EXCLUDED_STEM))
        .in_r1()
        .undouble()
        .then_e(),
    SuffixRule::strip("se", Condition::ConsonantExcept('j'))
        .in_r1()
        .then_e(),
    SuffixRule::strip("'s", Condition::Always).then_e(),
    SuffixRule::strip("s", Condition::ConsonantExcept('j'))
        .in_r1()
        .then_e(),
];

/// A final `-e` inside R1 after a consonant.
pub static TRAILING_E: &[SuffixRule] = &[SuffixRule::strip("e", Condition::Consonant).in_r1()];

/// Strip a standard suffix and then a trailing `-e`. Returns `true` if
/// anything was removed.
pub(crate) fn resolve(buffer: &mut StemBuffer) -> bool {
    let first = buffer.resolve(STANDARD_SUFFIXES, Selection::LongestLiteral);
    let then_e = first.is_none_or(|rule| rule.then_e);

    let trailing = then_e
        && buffer
            .resolve(TRAILING_E, Selection::LongestLiteral)
            .is_some();

    first.is_some() || trailing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(word: &str) -> String {
        let mut buffer = StemBuffer::new(word);
        resolve(&mut buffer);
        buffer.into_string()
    }

    #[test]
    fn test_heden() {
        assert_eq!(strip("mogelijkheden"), "mogelijkheid");
    }

    #[test]
    fn test_en() {
        assert_eq!(strip("vrouwen"), "vrouw");
        assert_eq!(strip("groen"), "groen");
        assert_eq!(strip("den"), "den");
        assert_eq!(strip("groeien"), "groei");
        assert_eq!(strip("aardbeien"), "aardbei");
    }

    #[test]
    fn test_en_undoubles_consonant() {
        assert_eq!(strip("bakken"), "bak");
        assert_eq!(strip("bakkene"), "bak");
    }

    #[test]
    fn test_en_after_gem_is_kept() {
        assert_eq!(strip("bezigemen"), "bezigemen");
        assert_eq!(strip("lopen"), "lop");
    }

    #[test]
    fn test_s() {
        assert_eq!(strip("torens"), "toren");
        assert_eq!(strip("prijs"), "prijs");
        assert_eq!(strip("firma's"), "firma");
    }

    #[test]
    fn test_diaeresis_en_skips_trailing_e() {
        assert_eq!(strip("allergieën"), "allergie");
        assert_eq!(strip("ideeën"), "idee");
    }

    #[test]
    fn test_diaeresis_en_before_r1_is_kept() {
        // R1 of "zeeën" starts at 4, after the ë.
        assert_eq!(strip("zeeën"), "zeeën");
    }

    #[test]
    fn test_trailing_e() {
        assert_eq!(strip("kleine"), "klein");
        assert_eq!(strip("missie"), "missie");
        assert_eq!(strip("zo"), "zo");
    }

    #[test]
    fn test_suffix_before_r1_is_kept() {
        // R1 of "heden" starts at 3; the literal "heden" starts at 0 and the
        // shorter "en" is not tried.
        assert_eq!(strip("heden"), "heden");
    }
}
