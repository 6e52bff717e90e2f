//! # Wortel
//!
//! A rule-based stemmer for Dutch, with a small text analysis pipeline
//! around it.
//!
//! ## Features
//!
//! - Suffix stripping for diminutives, comparatives, superlatives, plurals
//!   and verbal endings
//! - Consonant and long-vowel normalization
//! - Regex tokenizer, lowercase and Dutch stop-word filters
//! - Command-line front end
//!
//! ```
//! assert_eq!(wortel::stem("mogelijkheden"), "mogelijkheid");
//! assert_eq!(wortel::stem("schaapjes"), "schap");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub use analysis::token_filter::stem::dutch::{DutchStemmer, stem};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
