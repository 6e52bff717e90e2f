//! Analyzers: a tokenizer followed by a chain of filters.

use std::fmt;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

pub mod config;
pub mod dutch;

pub use config::{DutchAnalyzerConfig, StemmerKind, StopWordConfig};
pub use dutch::DutchAnalyzer;

/// Turns text into normalized tokens.
pub trait Analyzer: Send + Sync {
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    fn name(&self) -> &'static str;
}

/// A tokenizer and filters applied in the order they were added.
///
/// Tokens are pulled through the whole chain one at a time. Once a filter
/// marks a token stopped, the remaining filters leave it alone.
///
/// ```
/// use wortel::analysis::analyzer::{Analyzer, PipelineAnalyzer};
/// use wortel::analysis::token_filter::{LowercaseFilter, StopFilter};
/// use wortel::analysis::tokenizer::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
///
/// let analyzer = PipelineAnalyzer::new(RegexTokenizer::new(DEFAULT_TOKEN_PATTERN).unwrap())
///     .with_filter(LowercaseFilter)
///     .with_filter(StopFilter::from_words(["de", "en"]));
///
/// let words: Vec<_> = analyzer.analyze("Maan DE zon EN sterren").map(|t| t.text).collect();
/// assert_eq!(words, ["maan", "zon", "sterren"]);
/// ```
pub struct PipelineAnalyzer {
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: impl Tokenizer + 'static) -> Self {
        PipelineAnalyzer {
            tokenizer: Box::new(tokenizer),
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    fn run_filters(&self, token: Token) -> Option<Token> {
        self.filters.iter().try_fold(token, |token, filter| {
            if token.is_stopped() {
                Some(token)
            } else {
                filter.apply(token)
            }
        })
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(
            self.tokenizer
                .tokenize(text)
                .filter_map(move |token| self.run_filters(token)),
        )
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<_> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}
