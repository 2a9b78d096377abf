//! N-gram classifier with snapshot persistence.

use std::path::Path;

use log::{debug, info};

use super::classifier::TextClassifier;
use super::config::ClassifierConfig;
use super::corpus::TrainingExample;
use super::model::FrequencyModel;
use super::snapshot::{load_snapshot, save_snapshot, SnapshotFormat};
use super::types::{ClassScore, Classification};
use crate::analysis::preprocess::preprocess_sentence;
use crate::error::Result;

/// Classifies word sequences by the rarity of the n-grams they share with
/// each class.
///
/// A classifier starts untrained. It becomes ready once [`train`](Self::train),
/// [`fit`](Self::fit) or [`load`](Self::load) has given it at least one class.
/// Classifying an untrained classifier yields the no-match result.
#[derive(Debug, Clone)]
pub struct NgramClassifier {
    config: ClassifierConfig,
    model: FrequencyModel,
}

impl NgramClassifier {
    /// Create an untrained classifier.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let model = FrequencyModel::new(config.tokenizer()?);
        Ok(NgramClassifier { config, model })
    }

    /// Create a classifier and load the snapshot at `config.snapshot_path`.
    pub fn open(config: ClassifierConfig) -> Result<Self> {
        let mut classifier = Self::new(config)?;
        classifier.load()?;
        Ok(classifier)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Whether at least one class has been trained or loaded.
    pub fn is_ready(&self) -> bool {
        !self.model.is_empty()
    }

    /// Update the in-memory model without persisting it.
    pub fn fit(&mut self, examples: &[TrainingExample]) {
        self.model.train(examples);
        info!(
            "Trained on {} examples ({} classes, {} distinct n-grams)",
            examples.len(),
            self.model.num_classes(),
            self.model.vocabulary_size()
        );
    }

    /// Train on `examples` and write the model to the configured snapshot.
    ///
    /// If the snapshot cannot be written the error is returned, but the
    /// in-memory model keeps the update.
    pub fn train(&mut self, examples: &[TrainingExample]) -> Result<()> {
        self.fit(examples);
        self.save()
    }

    /// Write the model to the configured snapshot path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config.snapshot_path, self.config.format())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P, format: SnapshotFormat) -> Result<()> {
        let path = path.as_ref();
        save_snapshot(&self.model.to_snapshot(), path, format)?;
        info!("Saved model snapshot to {}", path.display());
        Ok(())
    }

    /// Replace the model with the configured snapshot.
    pub fn load(&mut self) -> Result<()> {
        let path = self.config.snapshot_path.clone();
        let format = self.config.format();
        self.load_from(path, format)
    }

    /// Replace the model with the snapshot at `path`.
    ///
    /// The n-gram size and mode stored in the snapshot win over the
    /// configuration, which is updated to match.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P, format: SnapshotFormat) -> Result<()> {
        let path = path.as_ref();
        let model = FrequencyModel::from_snapshot(load_snapshot(path, format)?)?;

        self.config.ngram_size = model.ngram_size();
        self.config.mode = model.mode();
        self.model = model;

        info!(
            "Loaded model snapshot from {} ({} classes)",
            path.display(),
            self.model.num_classes()
        );
        Ok(())
    }

    /// Score `words` against every class and pick the best.
    ///
    /// Classes are visited in insertion order. A later class only takes the
    /// lead with a strictly higher score; an equal positive score marks the
    /// result as untrusted.
    pub fn classify<S: AsRef<str>>(&self, words: &[S]) -> Classification {
        let ngrams = self.model.tokenizer().tokenize(words);

        let mut best: Option<&str> = None;
        let mut best_score = 0.0;
        let mut trusted = true;

        for (label, class) in self.model.classes() {
            let score = self.model.score(&ngrams, class);
            debug!("class {}: score {}", label, score);

            if score > best_score {
                best = Some(label);
                best_score = score;
                trusted = true;
            } else if score > 0.0 && score == best_score {
                trusted = false;
            }
        }

        match best {
            Some(label) => Classification {
                label: Some(label.to_string()),
                score: best_score,
                trusted,
            },
            None => Classification::no_match(),
        }
    }

    /// Classify a sentence that is already clean, splitting on whitespace.
    pub fn classify_text(&self, sentence: &str) -> Classification {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        self.classify(&words)
    }

    /// Score of a single class, or `None` if the class is unknown.
    pub fn class_score<S: AsRef<str>>(&self, words: &[S], label: &str) -> Option<f64> {
        let class = self.model.class_ngrams(label)?;
        let ngrams = self.model.tokenizer().tokenize(words);
        Some(self.model.score(&ngrams, class))
    }

    /// Scores of every class, in insertion order.
    pub fn class_scores<S: AsRef<str>>(&self, words: &[S]) -> Vec<ClassScore> {
        let ngrams = self.model.tokenizer().tokenize(words);
        self.model
            .classes()
            .map(|(label, class)| ClassScore {
                label: label.to_string(),
                score: self.model.score(&ngrams, class),
            })
            .collect()
    }
}

impl TextClassifier for NgramClassifier {
    fn predict(&self, sentence: &str) -> Result<Classification> {
        Ok(self.classify_text(&preprocess_sentence(sentence)))
    }

    fn name(&self) -> &str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ngram::NgramMode;
    use tempfile::TempDir;

    fn example(sentence: &str, label: &str) -> TrainingExample {
        TrainingExample::new(sentence.split_whitespace(), label)
    }

    fn weather_and_food() -> Vec<TrainingExample> {
        vec![
            example("the sky is blue today", "weather"),
            example("it will rain tomorrow", "weather"),
            example("i would like some pizza", "food"),
            example("the pasta is very good", "food"),
        ]
    }

    fn trained() -> NgramClassifier {
        let mut classifier = NgramClassifier::new(ClassifierConfig::default()).unwrap();
        classifier.fit(&weather_and_food());
        classifier
    }

    #[test]
    fn test_untrained_returns_no_match() {
        let classifier = NgramClassifier::new(ClassifierConfig::default()).unwrap();
        assert!(!classifier.is_ready());
        assert_eq!(classifier.classify_text("the sky is blue"), Classification::no_match());
    }

    #[test]
    fn test_training_sentence_scores_own_class() {
        let classifier = trained();
        assert!(classifier.is_ready());

        let result = classifier.classify_text("it will rain tomorrow");
        assert_eq!(result.label.as_deref(), Some("weather"));
        assert!(result.score > 0.0);
        assert!(result.trusted);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let classifier = trained();
        let first = classifier.classify_text("i would like some pasta");
        let second = classifier.classify_text("i would like some pasta");
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_match() {
        let classifier = trained();
        let result = classifier.classify_text("quantum chromodynamics lecture");
        assert_eq!(result.label, None);
        assert_eq!(result.score, 0.0);
        assert!(result.trusted);
    }

    #[test]
    fn test_tie_is_untrusted_and_keeps_first_class() {
        let mut classifier = NgramClassifier::new(ClassifierConfig::default()).unwrap();
        classifier.fit(&[example("good morning", "first"), example("good morning", "second")]);

        let result = classifier.classify_text("good morning");
        assert_eq!(result.label.as_deref(), Some("first"));
        assert_eq!(result.score, 0.5);
        assert!(!result.trusted);
        assert_eq!(result.confident_label(), None);
    }

    #[test]
    fn test_higher_score_restores_trust() {
        let mut classifier = NgramClassifier::new(ClassifierConfig::default()).unwrap();
        classifier.fit(&[
            example("good morning", "a"),
            example("good morning", "b"),
            example("good morning sunshine", "c"),
        ]);

        let result = classifier.classify_text("good morning sunshine");
        assert_eq!(result.label.as_deref(), Some("c"));
        assert!(result.trusted);
    }

    #[test]
    fn test_class_scores() {
        let classifier = trained();
        let words = ["the", "sky", "is", "blue"];

        let scores = classifier.class_scores(&words);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "weather");
        assert!(scores[0].score > scores[1].score);

        assert_eq!(classifier.class_score(&words, "weather"), Some(scores[0].score));
        assert_eq!(classifier.class_score(&words, "sports"), None);
    }

    #[test]
    fn test_train_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let config = ClassifierConfig::default().with_snapshot_path(dir.path().join("model.bin"));

        let mut classifier = NgramClassifier::new(config.clone()).unwrap();
        classifier.train(&weather_and_food()).unwrap();

        let reopened = NgramClassifier::open(config).unwrap();
        for sentence in ["the sky is blue", "some pizza", "the pasta is blue", "nothing here"] {
            assert_eq!(classifier.classify_text(sentence), reopened.classify_text(sentence));
        }
    }

    #[test]
    fn test_load_adopts_snapshot_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");

        let config = ClassifierConfig::default()
            .with_ngram_size(3)
            .with_mode(NgramMode::Character);
        let mut classifier = NgramClassifier::new(config).unwrap();
        classifier.fit(&weather_and_food());
        classifier.save_to(&path, SnapshotFormat::Json).unwrap();

        let mut fresh = NgramClassifier::new(ClassifierConfig::default()).unwrap();
        fresh.load_from(&path, SnapshotFormat::Json).unwrap();
        assert_eq!(fresh.config().ngram_size, 3);
        assert_eq!(fresh.config().mode, NgramMode::Character);
    }

    #[test]
    fn test_failed_save_keeps_model() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let config = ClassifierConfig::default().with_snapshot_path(blocker.join("model.bin"));

        let mut classifier = NgramClassifier::new(config).unwrap();
        assert!(classifier.train(&weather_and_food()).is_err());
        assert!(classifier.is_ready());
    }

    #[test]
    fn test_predict_preprocesses() {
        let classifier = trained();
        let result = classifier.predict("It will RAIN tomorrow!").unwrap();
        assert_eq!(result.label.as_deref(), Some("weather"));
        assert_eq!(classifier.name(), "ngram");
    }
}
