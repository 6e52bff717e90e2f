//! Per-call working state of the Dutch stemmer.

use super::region::r1;
use super::suffix::{Action, Selection, SuffixMatch, SuffixRule, find_suffix};
use super::undouble::{undouble_consonant, undouble_vowel};

/// The word being stemmed.
///
/// R1 is fixed from the input word; suffix removal only ever touches the
/// end of the word, so the boundary stays valid for every later step.
#[derive(Debug, Clone)]
pub struct StemBuffer {
    chars: Vec<char>,
    r1: usize,
    consonant_undoubled: bool,
}

impl StemBuffer {
    pub fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let r1 = r1(&chars);
        StemBuffer {
            chars,
            r1,
            consonant_undoubled: false,
        }
    }

    #[cfg(test)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[cfg(test)]
    pub fn r1(&self) -> usize {
        self.r1
    }

    /// Look up the rule in `rules` that applies to the current word.
    pub fn find(&self, rules: &'static [SuffixRule], selection: Selection) -> Option<SuffixMatch> {
        find_suffix(&self.chars, self.r1, rules, selection)
    }

    /// Apply a matched rule to the word.
    pub fn apply(&mut self, found: SuffixMatch) {
        self.chars.truncate(found.start);
        match found.rule.action {
            Action::Strip => {}
            Action::Replace(text) => self.chars.extend(text.chars()),
            Action::StripUndouble => self.undouble_consonant(),
        }
    }

    /// Find and apply the first rule in `rules` that fits. Returns the rule
    /// that fired, if any.
    pub fn resolve(
        &mut self,
        rules: &'static [SuffixRule],
        selection: Selection,
    ) -> Option<&'static SuffixRule> {
        let found = self.find(rules, selection)?;
        self.apply(found);
        Some(found.rule)
    }

    /// Consonant undoubling runs at most once per word.
    fn undouble_consonant(&mut self) {
        if !self.consonant_undoubled {
            undouble_consonant(&mut self.chars);
            self.consonant_undoubled = true;
        }
    }

    /// The closing doubling pass: consonant, then vowel.
    pub fn normalize(&mut self) {
        self.undouble_consonant();
        undouble_vowel(&mut self.chars);
    }

    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}
