//! Per-token rewriting after tokenization.
//!
//! A Dutch analyzer runs lowercase, stop words and stemming in that order.
//! The order matters: the stop list and the suffix tables are lowercase.

use crate::analysis::token::Token;

pub mod stem;
pub mod stop;

pub use stem::StemFilter;
pub use stop::{StopFilter, StopMode};

/// One step of an analyzer's filter chain.
///
/// [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer) passes
/// stopped tokens around every filter, so implementations only ever see live
/// tokens.
pub trait Filter: Send + Sync {
    /// Rewrite `token`, or return `None` to drop it from the stream.
    fn apply(&self, token: Token) -> Option<Token>;

    fn name(&self) -> &'static str;
}

/// Unicode lowercasing, so that `IDEEËN` reaches the stemmer as `ideeën`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl Filter for LowercaseFilter {
    fn apply(&self, token: Token) -> Option<Token> {
        let lowered = token.text.to_lowercase();
        Some(token.with_text(lowered))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
