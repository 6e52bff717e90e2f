//! Diminutive suffixes (-je, -tje, -pje, -etje, -jes).

use super::buffer::StemBuffer;
use super::suffix::{Condition, Selection, SuffixRule};

/// Diminutive endings, longest first.
///
/// `-inkje` is the diminutive of a stem in `-ing` ("kettinkje" → "ketting").
pub static DIMINUTIVE_SUFFIXES: &[SuffixRule] = &[
    SuffixRule::replace("inkje", "ing", Condition::Always),
    SuffixRule::strip("'tje", Condition::Always),
    SuffixRule::strip("etje", Condition::Always),
    SuffixRule::strip("jes", Condition::Always),
    SuffixRule::strip("pje", Condition::Consonant),
    SuffixRule::strip("tje", Condition::Consonant),
    SuffixRule::strip("je", Condition::Consonant),
];

/// Strip a diminutive suffix. Returns `true` if one was found.
pub(crate) fn resolve(buffer: &mut StemBuffer) -> bool {
    buffer
        .resolve(DIMINUTIVE_SUFFIXES, Selection::FirstEligible)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(word: &str) -> Option<String> {
        let mut buffer = StemBuffer::new(word);
        resolve(&mut buffer).then(|| buffer.into_string())
    }

    #[test]
    fn test_diminutive_forms() {
        assert_eq!(strip("dingetje").as_deref(), Some("ding"));
        assert_eq!(strip("baby'tje").as_deref(), Some("baby"));
        assert_eq!(strip("vrouwtje").as_deref(), Some("vrouw"));
        assert_eq!(strip("filmpje").as_deref(), Some("film"));
        assert_eq!(strip("kostuumpje").as_deref(), Some("kostuum"));
        assert_eq!(strip("kindje").as_deref(), Some("kind"));
        assert_eq!(strip("kettinkje").as_deref(), Some("ketting"));
        assert_eq!(strip("schaapjes").as_deref(), Some("schaap"));
    }

    #[test]
    fn test_je_needs_consonant() {
        // "pje" after a vowel falls back to "je" after the p.
        assert_eq!(strip("schaapje").as_deref(), Some("schaap"));
        assert_eq!(strip("mooie"), None);
        assert_eq!(strip("je"), None);
    }

    #[test]
    fn test_pje_keeps_the_m() {
        let found = StemBuffer::new("filmpje")
            .find(DIMINUTIVE_SUFFIXES, Selection::FirstEligible)
            .unwrap();
        assert_eq!(found.rule.literal, "pje");
        assert_eq!(strip("filmpje").as_deref(), Some("film"));
        assert_eq!(strip("boompje").as_deref(), Some("boom"));
    }

    #[test]
    fn test_no_diminutive() {
        assert_eq!(strip("vrouwen"), None);
        assert_eq!(strip("lekkerder"), None);
    }
}
