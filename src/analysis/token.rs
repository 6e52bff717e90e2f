//! Tokens flowing from the tokenizer through the filter chain.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One word of the analyzed text.
///
/// Filters rewrite `text` but never move the byte span, so a stem can
/// always be traced back to the surface form it came from:
///
/// ```
/// use wortel::analysis::token::Token;
///
/// let text = "twee huizen";
/// let token = Token::new("huizen", 1, 5..11).with_text("huiz");
/// assert_eq!(&text[token.span()], "huizen");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Index of the word in the tokenizer output, before any removal.
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Set by a stop filter in marking mode.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stopped: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: span.start,
            end_offset: span.end,
            stopped: false,
        }
    }

    /// Byte range of the surface form in the analyzed text.
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Lazily produced tokens, borrowing from the analyzer and the input text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
