//! Printing stem and analysis results as text or JSON.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, WortelArgs};
use crate::error::Result;

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    /// Lines printed in human-readable mode.
    fn human_lines(&self) -> Vec<String>;
}

/// A single stemmed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemEntry {
    pub word: String,
    pub stem: String,
}

/// Result structure for the stem command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResults {
    pub stemmer: String,
    pub entries: Vec<StemEntry>,
    pub duration_ms: u64,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub analyzer: String,
    pub tokens: Vec<Token>,
}

/// How often one stem occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Result structure for `analyze --counts`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermCounts {
    pub total_tokens: usize,
    pub terms: Vec<TermCount>,
}

impl HumanOutput for StemResults {
    fn human_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{} → {}", entry.word, entry.stem))
            .collect()
    }
}

impl HumanOutput for AnalysisResults {
    fn human_lines(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|token| {
                let marker = if token.is_stopped() { " (stopped)" } else { "" };
                format!(
                    "{:>4}  {:<20} [{}..{}]{}",
                    token.position, token.text, token.start_offset, token.end_offset, marker
                )
            })
            .collect()
    }
}

impl HumanOutput for TermCounts {
    fn human_lines(&self) -> Vec<String> {
        self.terms
            .iter()
            .map(|term| format!("{:>6}  {}", term.count, term.term))
            .collect()
    }
}

/// Print `result` in the format chosen by `--format`. In human mode
/// `message` is printed as a heading at `-vv` and above.
pub fn output_result<T>(message: &str, result: &T, args: &WortelArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WortelArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &WortelArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_results_lines() {
        let results = StemResults {
            stemmer: "dutch".to_string(),
            entries: vec![
                StemEntry {
                    word: "vrouwen".to_string(),
                    stem: "vrouw".to_string(),
                },
                StemEntry {
                    word: "maan".to_string(),
                    stem: "man".to_string(),
                },
            ],
            duration_ms: 0,
        };

        assert_eq!(results.human_lines(), vec!["vrouwen → vrouw", "maan → man"]);
    }

    #[test]
    fn test_analysis_results_mark_stopped_tokens() {
        let results = AnalysisResults {
            analyzer: "dutch".to_string(),
            tokens: vec![
                Token::new("de", 0, 0..2).stop(),
                Token::new("vrouw", 1, 3..10),
            ],
        };

        let lines = results.human_lines();
        assert!(lines[0].ends_with("(stopped)"));
        assert!(lines[1].contains("vrouw"));
        assert!(lines[1].contains("[3..10]"));
    }

    #[test]
    fn test_term_counts_json() {
        let counts = TermCounts {
            total_tokens: 3,
            terms: vec![
                TermCount {
                    term: "kind".to_string(),
                    count: 2,
                },
                TermCount {
                    term: "vrouw".to_string(),
                    count: 1,
                },
            ],
        };

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"total_tokens":3,"terms":[{"term":"kind","count":2},{"term":"vrouw","count":1}]}"#
        );
        assert_eq!(counts.human_lines()[0], "     2  kind");
    }
}
