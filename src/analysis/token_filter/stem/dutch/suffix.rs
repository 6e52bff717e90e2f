//! Suffix candidate tables and the matcher shared by every resolver.
//!
//! Each resolver owns a static table of [`SuffixRule`]s ordered from the
//! longest literal to the shortest, and asks [`find_suffix`] for the rule to
//! apply under its [`Selection`] policy.

use super::letter::{is_boundary_consonant, is_vowel};

/// Test on the letter directly before a suffix occurrence.
///
/// "Consonant" here always means the boundary class, so a glide counts as a
/// consonant; "vowel" means the base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// No test.
    Always,
    /// Preceded by a consonant.
    Consonant,
    /// Preceded by a vowel.
    Vowel,
    /// Preceded by this exact letter.
    Letter(char),
    /// Preceded by a vowel other than this letter.
    VowelExcept(char),
    /// Preceded by this letter or by a consonant.
    LetterOrConsonant(char),
    /// Preceded by a consonant other than this letter.
    ConsonantExcept(char),
    /// Preceded by a consonant, and the remaining stem does not end in this text.
    ConsonantNotAfter(&'static str),
}

impl Condition {
    /// Evaluate the condition for a suffix starting at `start`.
    pub fn holds(self, word: &[char], start: usize) -> bool {
        let Some(prev) = start.checked_sub(1) else {
            return self == Condition::Always;
        };
        let letter = word[prev];

        match self {
            Condition::Always => true,
            Condition::Consonant => is_boundary_consonant(word, prev),
            Condition::Vowel => is_vowel(word, prev),
            Condition::Letter(c) => letter == c,
            Condition::VowelExcept(c) => letter != c && is_vowel(word, prev),
            Condition::LetterOrConsonant(c) => letter == c || is_boundary_consonant(word, prev),
            Condition::ConsonantExcept(c) => letter != c && is_boundary_consonant(word, prev),
            Condition::ConsonantNotAfter(tail) => {
                is_boundary_consonant(word, prev) && !ends_with(&word[..start], tail)
            }
        }
    }
}

/// What happens to the word once a rule is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove the suffix.
    Strip,
    /// Remove the suffix and append fixed text.
    Replace(&'static str),
    /// Remove the suffix, then collapse a doubled final consonant.
    StripUndouble,
}

/// A suffix literal together with the checks that make it removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Text matched at the end of the word.
    pub literal: &'static str,
    /// Letters that must remain in front of the suffix.
    pub min_stem: usize,
    /// Test on the preceding letter.
    pub condition: Condition,
    /// Whether the suffix must start inside R1.
    pub in_r1: bool,
    /// Transformation applied on a match.
    pub action: Action,
    /// Whether the trailing `-e` check follows this rule (standard suffixes).
    pub then_e: bool,
}

impl SuffixRule {
    /// A rule that removes `literal` when `condition` holds.
    pub const fn strip(literal: &'static str, condition: Condition) -> Self {
        SuffixRule {
            literal,
            min_stem: 1,
            condition,
            in_r1: false,
            action: Action::Strip,
            then_e: false,
        }
    }

    /// A rule that replaces `literal` with `with` when `condition` holds.
    pub const fn replace(literal: &'static str, with: &'static str, condition: Condition) -> Self {
        SuffixRule {
            action: Action::Replace(with),
            ..SuffixRule::strip(literal, condition)
        }
    }

    /// Require the suffix to start inside R1.
    pub const fn in_r1(mut self) -> Self {
        self.in_r1 = true;
        self
    }

    /// Collapse a doubled consonant after stripping.
    pub const fn undouble(mut self) -> Self {
        self.action = Action::StripUndouble;
        self
    }

    /// Follow this rule with the trailing `-e` check.
    pub const fn then_e(mut self) -> Self {
        self.then_e = true;
        self
    }

    /// Number of characters in the literal.
    pub fn char_len(&self) -> usize {
        self.literal.chars().count()
    }

    /// Start index of the literal if the word ends with it.
    pub fn match_start(&self, word: &[char]) -> Option<usize> {
        let start = word.len().checked_sub(self.char_len())?;
        word[start..]
            .iter()
            .copied()
            .eq(self.literal.chars())
            .then_some(start)
    }

    /// Whether the rule may fire on a literal match starting at `start`.
    pub fn is_eligible(&self, word: &[char], start: usize, r1: usize) -> bool {
        start >= self.min_stem && (!self.in_r1 || start >= r1) && self.condition.holds(word, start)
    }
}

/// How a table is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Try rules in order and take the first eligible one.
    FirstEligible,
    /// Take the first rule whose literal matches; if it is not eligible,
    /// nothing matches.
    LongestLiteral,
}

/// A rule selected for a word, with the index where its literal starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    pub rule: &'static SuffixRule,
    pub start: usize,
}

/// Search `rules` (longest literal first) against the end of `word`.
pub fn find_suffix(
    word: &[char],
    r1: usize,
    rules: &'static [SuffixRule],
    selection: Selection,
) -> Option<SuffixMatch> {
    for rule in rules {
        let Some(start) = rule.match_start(word) else {
            continue;
        };

        if rule.is_eligible(word, start, r1) {
            return Some(SuffixMatch { rule, start });
        }

        if selection == Selection::LongestLiteral {
            return None;
        }
    }

    None
}

/// Returns `true` if `word` ends with `tail`.
pub fn ends_with(word: &[char], tail: &str) -> bool {
    let len = tail.chars().count();
    word.len() >= len && word[word.len() - len..].iter().copied().eq(tail.chars())
}
