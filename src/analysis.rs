//! Text analysis for Dutch.
//!
//! Tokenizers split text into tokens, filters normalize them and analyzers
//! chain the two. The Dutch stemmer lives in
//! [`token_filter::stem::dutch`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
