//! Command implementations for the Wortel CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use anyhow::Context;
use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, DutchAnalyzer, DutchAnalyzerConfig};
use crate::analysis::token::Token;
use crate::analysis::token_filter::stem::Stemmer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WortelError};

/// Entry point of the binary: runs the command and names it, and the
/// configuration file if any, in the error chain.
pub fn run(args: WortelArgs) -> anyhow::Result<()> {
    let context = match &args.config {
        Some(path) => format!("wortel {} (config {})", args.command.name(), path.display()),
        None => format!("wortel {}", args.command.name()),
    };
    execute_command(args).context(context)
}

/// Execute a CLI command.
pub fn execute_command(args: WortelArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Stem(stem_args) => stem_command(stem_args, &config, &args),
        Command::Analyze(analyze_args) => analyze_command(analyze_args, config, &args),
    }
}

/// Load the analyzer configuration named by `--config`, or the defaults.
pub fn load_config(args: &WortelArgs) -> Result<DutchAnalyzerConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            DutchAnalyzerConfig::from_json_file(path)
        }
        None => Ok(DutchAnalyzerConfig::default()),
    }
}

/// Read one word per line, skipping blank lines.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Lowercase and stem every word, keeping input order.
pub fn stem_words(words: &[String], stemmer: &dyn Stemmer, parallel: bool) -> Vec<StemEntry> {
    let stem_one = |word: &String| StemEntry {
        word: word.clone(),
        stem: stemmer.stem(&word.to_lowercase()),
    };

    if parallel {
        words.par_iter().map(stem_one).collect()
    } else {
        words.iter().map(stem_one).collect()
    }
}

/// Count non-stopped tokens by text, most frequent first and ties by text.
pub fn count_terms(tokens: &[Token]) -> TermCounts {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for token in tokens.iter().filter(|token| !token.is_stopped()) {
        *counts.entry(token.text.as_str()).or_insert(0) += 1;
    }

    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));

    TermCounts {
        total_tokens: terms.iter().map(|term| term.count).sum(),
        terms,
    }
}

fn stem_command(args: &StemArgs, config: &DutchAnalyzerConfig, cli_args: &WortelArgs) -> Result<()> {
    let mut words = args.words.clone();
    if let Some(input) = &args.input {
        info!("Reading words from: {}", input.display());
        words.extend(read_words(input)?);
    }
    if words.is_empty() {
        return Err(WortelError::invalid_argument("no words to stem"));
    }

    let stemmer = args.stemmer.unwrap_or(config.stemmer).build();
    debug!(
        "Stemming {} words with the {} stemmer (parallel: {})",
        words.len(),
        stemmer.name(),
        args.parallel
    );

    let start_time = Instant::now();
    let entries = stem_words(&words, stemmer.as_ref(), args.parallel);
    let duration = start_time.elapsed();

    output_result(
        &format!("Stemmed {} words", entries.len()),
        &StemResults {
            stemmer: stemmer.name().to_string(),
            entries,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

fn analyze_command(
    args: &AnalyzeArgs,
    mut config: DutchAnalyzerConfig,
    cli_args: &WortelArgs,
) -> Result<()> {
    if let Some(mode) = args.stop_mode {
        config.stop_words.mode = mode;
    }
    let analyzer = DutchAnalyzer::from_config(&config)?;
    let tokens: Vec<Token> = analyzer.analyze(&args.text).collect();
    debug!("Analyzer produced {} tokens", tokens.len());

    if args.counts {
        output_result("Stem frequencies", &count_terms(&tokens), cli_args)
    } else {
        output_result(
            "Analyzed tokens",
            &AnalysisResults {
                analyzer: analyzer.name().to_string(),
                tokens,
            },
            cli_args,
        )
    }
}
