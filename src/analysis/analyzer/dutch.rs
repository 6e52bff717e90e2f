//! The analyzer behind `wortel analyze`.

use log::debug;

use crate::analysis::analyzer::config::DutchAnalyzerConfig;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Word tokenizer, lowercasing, Dutch stop words and a stemmer, each stage
/// switchable through [`DutchAnalyzerConfig`].
///
/// ```
/// use wortel::analysis::analyzer::{Analyzer, DutchAnalyzer};
///
/// let analyzer = DutchAnalyzer::new().unwrap();
/// let stems: Vec<_> = analyzer.analyze("De kleine kinderen").map(|t| t.text).collect();
/// assert_eq!(stems, ["klein", "kinder"]);
/// ```
#[derive(Debug)]
pub struct DutchAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl DutchAnalyzer {
    pub fn new() -> Result<Self> {
        Self::from_config(&DutchAnalyzerConfig::default())
    }

    pub fn from_config(config: &DutchAnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let mut pipeline = PipelineAnalyzer::new(RegexTokenizer::new(&config.token_pattern)?);
        if config.lowercase {
            pipeline = pipeline.with_filter(LowercaseFilter);
        }
        if config.stop_words.enabled {
            let stop = StopFilter::dutch_with(config.stop_words.extra_words.iter().cloned())
                .mode(config.stop_words.mode);
            pipeline = pipeline.with_filter(stop);
        }
        let pipeline = pipeline.with_filter(StemFilter::new(config.stemmer.build()));

        debug!("dutch analyzer: {pipeline:?}");
        Ok(DutchAnalyzer { pipeline })
    }
}

impl Analyzer for DutchAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "dutch"
    }
}
