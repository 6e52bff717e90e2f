//! Stemmers and the filter that runs them over a token stream.

use std::fmt;

use log::trace;

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

pub mod dutch;

pub use dutch::DutchStemmer;

/// Maps a lowercase word to its stem. Must be total: every input, including
/// the empty string, has an output.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Leaves words as they are, to compare analysis output with and without
/// stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Replaces each token's text with its stem.
pub struct StemFilter {
    stemmer: Box<dyn Stemmer>,
}

impl StemFilter {
    pub fn new(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StemFilter").field(&self.stemmer.name()).finish()
    }
}

impl Filter for StemFilter {
    fn apply(&self, token: Token) -> Option<Token> {
        let stem = self.stemmer.stem(&token.text);
        trace!("{} -> {}", token.text, stem);
        Some(token.with_text(stem))
    }

    /// Named after the stemmer, so a pipeline's debug output shows which one
    /// is active.
    fn name(&self) -> &'static str {
        self.stemmer.name()
    }
}
