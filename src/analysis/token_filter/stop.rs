//! Dutch stop words.

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

/// The Snowball Dutch stop list: articles, pronouns, prepositions,
/// conjunctions and the common forms of `zijn`, `hebben` and `worden`.
pub const DUTCH_STOP_WORDS: &[&str] = &[
    "aan", "al", "alles", "als", "altijd", "andere", "ben", "bij", "daar", "dan", "dat", "de",
    "der", "deze", "die", "dit", "doch", "doen", "door", "dus", "een", "eens", "en", "er", "ge",
    "geen", "geweest", "haar", "had", "heb", "hebben", "heeft", "hem", "het", "hier", "hij", "hoe",
    "hun", "iemand", "iets", "ik", "in", "is", "ja", "je", "kan", "kon", "kunnen", "maar", "me",
    "meer", "men", "met", "mij", "mijn", "moet", "na", "naar", "niet", "niets", "nog", "nu", "of",
    "om", "omdat", "onder", "ons", "ook", "op", "over", "reeds", "te", "tegen", "toch", "toen",
    "tot", "u", "uit", "uw", "van", "veel", "voor", "want", "waren", "was", "wat", "werd", "wezen",
    "wie", "wil", "worden", "wordt", "zal", "ze", "zelf", "zich", "zij", "zijn", "zo", "zonder",
    "zou",
];

static DUTCH: LazyLock<Arc<AHashSet<String>>> =
    LazyLock::new(|| Arc::new(DUTCH_STOP_WORDS.iter().map(|w| w.to_string()).collect()));

/// What happens to a token that is on the stop list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StopMode {
    /// Drop it from the stream.
    #[default]
    Remove,
    /// Keep it with its surface form and the stopped flag set.
    Mark,
}

/// Filters words on a stop list.
///
/// ```
/// use wortel::analysis::token::Token;
/// use wortel::analysis::token_filter::{Filter, StopFilter, StopMode};
///
/// let filter = StopFilter::dutch().mode(StopMode::Mark);
/// let token = filter.apply(Token::new("het", 0, 0..3)).unwrap();
/// assert!(token.is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<AHashSet<String>>,
    mode: StopMode,
}

impl StopFilter {
    /// The Dutch list, shared between filters.
    pub fn dutch() -> Self {
        StopFilter {
            words: Arc::clone(&*DUTCH),
            mode: StopMode::default(),
        }
    }

    /// The Dutch list extended with `extra`.
    pub fn dutch_with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: AHashSet<String> = (**DUTCH).clone();
        words.extend(extra.into_iter().map(Into::into));
        StopFilter {
            words: Arc::new(words),
            mode: StopMode::default(),
        }
    }

    /// A list of the caller's own, without the Dutch defaults.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            mode: StopMode::default(),
        }
    }

    pub fn mode(mut self, mode: StopMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Filter for StopFilter {
    fn apply(&self, token: Token) -> Option<Token> {
        if !self.contains(&token.text) {
            return Some(token);
        }
        match self.mode {
            StopMode::Remove => None,
            StopMode::Mark => Some(token.stop()),
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> Token {
        Token::new(text, 0, 0..text.len())
    }

    #[test]
    fn test_remove_mode() {
        let filter = StopFilter::dutch();

        assert!(filter.apply(token("de")).is_none());
        assert!(filter.apply(token("zijn")).is_none());
        assert_eq!(filter.apply(token("vrouwen")), Some(token("vrouwen")));
    }

    #[test]
    fn test_mark_mode_keeps_surface_form() {
        let filter = StopFilter::dutch().mode(StopMode::Mark);

        let stopped = filter.apply(token("hebben")).unwrap();
        assert_eq!(stopped.text, "hebben");
        assert!(stopped.is_stopped());
        assert!(!filter.apply(token("huizen")).unwrap().is_stopped());
    }

    #[test]
    fn test_list_is_case_sensitive() {
        // Lowercasing runs before this filter.
        assert!(StopFilter::dutch().apply(token("De")).is_some());
    }

    #[test]
    fn test_dutch_with_extra_words() {
        let filter = StopFilter::dutch_with(["bijvoorbeeld"]);
        assert!(filter.contains("bijvoorbeeld"));
        assert!(filter.contains("het"));
        assert!(!StopFilter::dutch().contains("bijvoorbeeld"));
    }

    #[test]
    fn test_from_words_replaces_defaults() {
        let filter = StopFilter::from_words(["maan"]);
        assert!(filter.contains("maan"));
        assert!(!filter.contains("het"));
    }

    #[test]
    fn test_list_has_no_duplicates() {
        assert_eq!(DUTCH.len(), DUTCH_STOP_WORDS.len());
    }

    #[test]
    fn test_mode_from_json() {
        let mode: StopMode = serde_json::from_str(r#""mark""#).unwrap();
        assert_eq!(mode, StopMode::Mark);
    }
}
