//! Command line argument parsing for the Wortel CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::StemmerKind;
use crate::analysis::token_filter::StopMode;

/// Command-line front end for the Dutch stemmer and analyzer.
#[derive(Parser, Debug, Clone)]
#[command(name = "wortel")]
#[command(about = "Reduce inflected Dutch words to a common stem")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WortelArgs {
    /// More log output (-vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results for a terminal or as JSON
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl WortelArgs {
    /// 0 with `--quiet`, otherwise 1 plus the `-v` count beyond the first.
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose.max(1) }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem individual words
    Stem(StemArgs),

    /// Run the Dutch analyzer over a piece of text
    Analyze(AnalyzeArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Stem(_) => "stem",
            Command::Analyze(_) => "analyze",
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORDS", required_unless_present = "input")]
    pub words: Vec<String>,

    /// Read words from a file, one per line
    #[arg(short, long, value_name = "WORD_FILE")]
    pub input: Option<PathBuf>,

    /// Stem words on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Stemmer to apply (overrides the configuration file)
    #[arg(short, long)]
    pub stemmer: Option<StemmerKind>,
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print stem frequencies instead of the token stream
    #[arg(long)]
    pub counts: bool,

    /// Remove stop words or keep them marked (overrides the configuration file)
    #[arg(long, value_name = "MODE")]
    pub stop_mode: Option<StopMode>,
}

/// `--format` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per word or token
    Human,
    /// A single JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_stem_command() {
        let args = WortelArgs::try_parse_from([
            "wortel",
            "stem",
            "vrouwen",
            "kindje",
            "--parallel",
            "--stemmer",
            "identity",
        ])
        .unwrap();

        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.words, vec!["vrouwen", "kindje"]);
            assert!(stem_args.parallel);
            assert_eq!(stem_args.stemmer, Some(StemmerKind::Identity));
            assert!(stem_args.input.is_none());
        } else {
            panic!("Expected Stem command");
        }
    }

    #[test]
    fn test_stem_requires_words_or_input() {
        assert!(WortelArgs::try_parse_from(["wortel", "stem"]).is_err());

        let args = WortelArgs::try_parse_from(["wortel", "stem", "--input", "woorden.txt"]).unwrap();
        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.input, Some(PathBuf::from("woorden.txt")));
            assert!(stem_args.words.is_empty());
        } else {
            panic!("Expected Stem command");
        }
    }

    #[test]
    fn test_analyze_command() {
        let args =
            WortelArgs::try_parse_from(["wortel", "analyze", "De kleine kinderen", "--counts"])
                .unwrap();

        assert_eq!(args.command.name(), "analyze");
        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text, "De kleine kinderen");
            assert!(analyze_args.counts);
            assert_eq!(analyze_args.stop_mode, None);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_stop_mode_override() {
        let args =
            WortelArgs::try_parse_from(["wortel", "analyze", "de maan", "--stop-mode", "mark"])
                .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.stop_mode, Some(StopMode::Mark));
        } else {
            panic!("Expected Analyze command");
        }
        assert!(WortelArgs::try_parse_from(["wortel", "analyze", "x", "--stop-mode", "keep"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = WortelArgs::try_parse_from(["wortel", "stem", "maan"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = WortelArgs::try_parse_from(["wortel", "-v", "stem", "maan"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = WortelArgs::try_parse_from(["wortel", "-vv", "stem", "maan"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = WortelArgs::try_parse_from(["wortel", "--quiet", "stem", "maan"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = WortelArgs::try_parse_from([
            "wortel", "stem", "maan", "--format", "json", "--pretty", "--config", "nl.json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("nl.json")));
    }
}
