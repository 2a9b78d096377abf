//! Command implementations for the Lexis CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::analysis::ngram::NgramMode;
use crate::analysis::preprocess::preprocess_sentence;
use crate::classifier::{load_training_data, ClassifierConfig, NgramClassifier, SnapshotFormat};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexisError, Result};
use crate::morphology::{Normalizer, NormalizerConfig, SlashTagger, Tagger};

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_model(train_args.clone(), &args),
        Command::Classify(classify_args) => classify_sentence(classify_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize_words(normalize_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_model(inspect_args.clone(), &args),
    }
}

/// Configuration for a command that only reads a model.
fn model_config(model: Option<PathBuf>) -> ClassifierConfig {
    let config = ClassifierConfig::default();
    match model {
        Some(path) => config.with_snapshot_path(path),
        None => config,
    }
}

/// Train a classifier and write its snapshot.
fn train_model(args: TrainArgs, cli_args: &LexisArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_json_file(path)?,
        None => ClassifierConfig::default(),
    };
    if let Some(model) = args.model {
        config = config.with_snapshot_path(model);
    }
    if let Some(n) = args.ngram {
        config = config.with_ngram_size(n);
    }
    if args.chars {
        config = config.with_mode(NgramMode::Character);
    }
    if let Some(format) = args.snapshot_format {
        config = config.with_snapshot_format(match format {
            SnapshotFormatArg::Binary => SnapshotFormat::Binary,
            SnapshotFormatArg::Json => SnapshotFormat::Json,
        });
    }

    if cli_args.verbosity() > 1 {
        println!("Training from: {}", args.corpus.display());
    }

    let start_time = Instant::now();
    let examples = load_training_data(&args.corpus)?;
    let mut classifier = NgramClassifier::new(config)?;
    classifier.train(&examples)?;
    let duration = start_time.elapsed();

    output_result(
        "Model trained successfully",
        &TrainResult {
            model_path: display_path(&classifier.config().snapshot_path),
            examples: examples.len(),
            classes: classifier.model().num_classes(),
            vocabulary_size: classifier.model().vocabulary_size(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Classify one sentence.
fn classify_sentence(args: ClassifyArgs, cli_args: &LexisArgs) -> Result<()> {
    let classifier = NgramClassifier::open(model_config(args.model))?;

    let cleaned = preprocess_sentence(&args.sentence);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let classification = classifier.classify(&words);

    output_result(
        "Classification",
        &ClassifyResult {
            sentence: args.sentence,
            label: classification.label,
            score: classification.score,
            trusted: classification.trusted,
            scores: args.scores.then(|| classifier.class_scores(&words)),
        },
        cli_args,
    )
}

/// Normalize `word/TAG` tokens.
fn normalize_words(args: NormalizeArgs, cli_args: &LexisArgs) -> Result<()> {
    let normalizer = Normalizer::from_config(&NormalizerConfig {
        exceptions_dir: args.exceptions,
    })?;
    let tagger = match args.default_tag {
        Some(tag) => SlashTagger::new(tag),
        None => SlashTagger::default(),
    };

    let tagged = tagger.tag(&args.words.join(" "))?;
    if tagged.is_empty() {
        return Err(LexisError::invalid_argument("no words to normalize"));
    }

    let words = tagged
        .into_iter()
        .map(|tagged| NormalizedWord {
            base: normalizer.normalize(&tagged.word, tagged.tag.as_deref()),
            word: tagged.word,
            tag: tagged.tag,
        })
        .collect();

    output_result("Normalized words", &NormalizeResult { words }, cli_args)
}

/// Show statistics about a trained model.
fn inspect_model(args: InspectArgs, cli_args: &LexisArgs) -> Result<()> {
    let classifier = NgramClassifier::open(model_config(args.model))?;

    output_result(
        "Model statistics",
        &InspectResult {
            model_path: display_path(&classifier.config().snapshot_path),
            stats: classifier.model().stats(),
        },
        cli_args,
    )
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
