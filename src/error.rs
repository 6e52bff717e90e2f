//! Error types for Wortel.
//!
//! Stemming never fails. Errors come from building an analyzer (a bad token
//! pattern), loading its JSON configuration and the command-line front end.
//!
//! ```
//! use wortel::analysis::analyzer::DutchAnalyzerConfig;
//! use wortel::error::WortelError;
//!
//! let err = DutchAnalyzerConfig::from_json_str(r#"{ "token_pattern": "" }"#).unwrap_err();
//! assert!(matches!(err, WortelError::Config(_)));
//! ```

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WortelError {
    /// Reading a word list or configuration file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Building a tokenizer or filter
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Values that parse but cannot be used
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command-line usage the argument parser cannot catch
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, WortelError>;

impl WortelError {
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WortelError::Analysis(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WortelError::Config(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WortelError::InvalidArgument(msg.into())
    }
}
