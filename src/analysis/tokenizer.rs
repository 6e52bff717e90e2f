//! Splitting text into word tokens.

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, WortelError};

/// Letters and digits, with apostrophe-joined parts kept together so that
/// `auto's`, `baby'tje` and `'s` reach the stemmer whole.
pub const DEFAULT_TOKEN_PATTERN: &str = r"'?[\p{L}\p{N}]+(?:'[\p{L}\p{N}]+)*";

/// First stage of an analyzer.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens carrying their byte spans in `text`.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    fn name(&self) -> &'static str;
}

/// Emits every non-overlapping match of a pattern as a token.
///
/// ```
/// use wortel::analysis::tokenizer::{DEFAULT_TOKEN_PATTERN, RegexTokenizer, Tokenizer};
///
/// let tokenizer = RegexTokenizer::new(DEFAULT_TOKEN_PATTERN).unwrap();
/// let words: Vec<_> = tokenizer.tokenize("Twee auto's.").map(|t| t.text).collect();
/// assert_eq!(words, ["Twee", "auto's"]);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| WortelError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(RegexTokenizer { regex })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(
            self.regex
                .find_iter(text)
                .enumerate()
                .map(|(position, found)| Token::new(found.as_str(), position, found.range())),
        )
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
