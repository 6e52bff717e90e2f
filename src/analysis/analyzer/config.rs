//! Configuration for the Dutch analyzer.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::StopMode;
use crate::analysis::token_filter::stem::{DutchStemmer, IdentityStemmer, Stemmer};
use crate::analysis::tokenizer::DEFAULT_TOKEN_PATTERN;
use crate::error::{Result, WortelError};

/// Which stemmer the analyzer applies after stop-word removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Rule-based Dutch suffix stripping.
    #[default]
    Dutch,
    /// Leave tokens unchanged.
    Identity,
}

impl StemmerKind {
    /// Build the stemmer this kind names.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Dutch => Box::new(DutchStemmer::new()),
            StemmerKind::Identity => Box::new(IdentityStemmer),
        }
    }
}

/// Stop-word handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopWordConfig {
    /// Whether stop words are filtered at all.
    pub enabled: bool,
    /// Words added to the default Dutch list.
    pub extra_words: Vec<String>,
    /// Drop stop words, or keep them marked as stopped.
    pub mode: StopMode,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_words: Vec::new(),
            mode: StopMode::Remove,
        }
    }
}

/// Configuration for [`DutchAnalyzer`](super::DutchAnalyzer).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use wortel::analysis::analyzer::config::{DutchAnalyzerConfig, StemmerKind};
///
/// let config: DutchAnalyzerConfig =
///     serde_json::from_str(r#"{ "stemmer": "identity" }"#).unwrap();
/// assert_eq!(config.stemmer, StemmerKind::Identity);
/// assert!(config.stop_words.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutchAnalyzerConfig {
    /// Regex used to extract tokens.
    pub token_pattern: String,
    /// Lowercase tokens before stop-word removal and stemming.
    pub lowercase: bool,
    /// Stop-word handling.
    pub stop_words: StopWordConfig,
    /// Stemmer applied to non-stopped tokens.
    pub stemmer: StemmerKind,
}

impl Default for DutchAnalyzerConfig {
    fn default() -> Self {
        Self {
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            lowercase: true,
            stop_words: StopWordConfig::default(),
            stemmer: StemmerKind::Dutch,
        }
    }
}

impl DutchAnalyzerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading analyzer configuration from {}", path.display());

        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.token_pattern.trim().is_empty() {
            return Err(WortelError::invalid_config("token_pattern must not be empty"));
        }
        Ok(())
    }
}
