//! Command line argument parsing for the Lexis CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexis - word normalization and n-gram sentence classification
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Word normalization and n-gram sentence classification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier from a TSV corpus and save its snapshot
    Train(TrainArgs),

    /// Classify a sentence with a trained model
    Classify(ClassifyArgs),

    /// Reduce tagged words to their base forms
    Normalize(NormalizeArgs),

    /// Show statistics about a trained model
    Inspect(InspectArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Train(_) => "train",
            Command::Classify(_) => "classify",
            Command::Normalize(_) => "normalize",
            Command::Inspect(_) => "inspect",
        }
    }
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Tab-separated corpus with `sentence` and `class` columns
    #[arg(value_name = "CORPUS_TSV")]
    pub corpus: PathBuf,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Snapshot to write
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// N-gram window size
    #[arg(short, long)]
    pub ngram: Option<usize>,

    /// Join n-gram units without spaces
    #[arg(long)]
    pub chars: bool,

    /// Snapshot encoding (defaults from the file extension)
    #[arg(long)]
    pub snapshot_format: Option<SnapshotFormatArg>,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Sentence to classify
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Snapshot to load
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Also report the score of every class
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Words to normalize, as `word/TAG` (a bare word uses --default-tag)
    #[arg(value_name = "WORD/TAG", required = true)]
    pub words: Vec<String>,

    /// Directory holding noun.exc, adj.exc, adv.exc and verb.exc
    #[arg(short, long, value_name = "DIR")]
    pub exceptions: Option<PathBuf>,

    /// Tag given to words without one
    #[arg(long)]
    pub default_tag: Option<String>,
}

/// Arguments for model inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Snapshot to load
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// Snapshot encodings selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormatArg {
    /// bincode
    Binary,
    /// JSON
    Json,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_train_command() {
        let args = LexisArgs::try_parse_from([
            "lexis",
            "train",
            "corpus.tsv",
            "--model",
            "model.json",
            "--ngram",
            "3",
            "--chars",
        ])
        .unwrap();

        if let Command::Train(train_args) = args.command {
            assert_eq!(train_args.corpus, PathBuf::from("corpus.tsv"));
            assert_eq!(train_args.model, Some(PathBuf::from("model.json")));
            assert_eq!(train_args.ngram, Some(3));
            assert!(train_args.chars);
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_classify_command() {
        let args =
            LexisArgs::try_parse_from(["lexis", "classify", "what time is it", "--scores"]).unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.sentence, "what time is it");
            assert!(classify_args.model.is_none());
            assert!(classify_args.scores);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_normalize_command() {
        let args = LexisArgs::try_parse_from([
            "lexis",
            "normalize",
            "mice/NNS",
            "ran/VBD",
            "--exceptions",
            "data/exceptions",
        ])
        .unwrap();

        if let Command::Normalize(normalize_args) = args.command {
            assert_eq!(normalize_args.words, vec!["mice/NNS", "ran/VBD"]);
            assert_eq!(
                normalize_args.exceptions,
                Some(PathBuf::from("data/exceptions"))
            );
        } else {
            panic!("Expected Normalize command");
        }
    }

    #[test]
    fn test_normalize_requires_words() {
        assert!(LexisArgs::try_parse_from(["lexis", "normalize"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexisArgs::try_parse_from(["lexis", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LexisArgs::try_parse_from(["lexis", "-vv", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = LexisArgs::try_parse_from(["lexis", "--quiet", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = LexisArgs::try_parse_from(["lexis", "--format", "json", "inspect"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_command_names() {
        let args = LexisArgs::try_parse_from(["lexis", "inspect"]).unwrap();
        assert_eq!(args.command.name(), "inspect");

        let args = LexisArgs::try_parse_from(["lexis", "classify", "hello"]).unwrap();
        assert_eq!(args.command.name(), "classify");
    }
}
