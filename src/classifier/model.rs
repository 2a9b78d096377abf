//! N-gram frequency model.
//!
//! The model stores, per class, every n-gram seen in that class's training
//! examples (in training order, duplicates kept) and a corpus-wide count of
//! each n-gram across all classes. The count is the total number of times the
//! n-gram occurs in any class list, so it is always positive for anything a
//! class can match and scoring can divide by it safely.

use std::collections::{BTreeMap, HashMap, HashSet};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::corpus::TrainingExample;
use super::snapshot::{ClassSnapshot, ModelSnapshot, SNAPSHOT_VERSION};
use crate::analysis::ngram::{NgramMode, NgramTokenizer};
use crate::error::{LexisError, Result};

/// The n-grams recorded for one class.
///
/// Keeps the ordered list with duplicates alongside a set used for
/// membership tests during scoring.
#[derive(Debug, Clone, Default)]
pub struct ClassNgrams {
    ngrams: Vec<String>,
    members: AHashSet<String>,
}

impl ClassNgrams {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_ngrams(ngrams: Vec<String>) -> Self {
        let members = ngrams.iter().cloned().collect();
        ClassNgrams { ngrams, members }
    }

    fn push(&mut self, ngram: String) {
        if !self.members.contains(&ngram) {
            self.members.insert(ngram.clone());
        }
        self.ngrams.push(ngram);
    }

    /// Whether the class has seen `ngram` at least once.
    pub fn contains(&self, ngram: &str) -> bool {
        self.members.contains(ngram)
    }

    /// Every recorded n-gram in training order, duplicates included.
    pub fn ngrams(&self) -> &[String] {
        &self.ngrams
    }

    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// Number of distinct n-grams.
    pub fn distinct(&self) -> usize {
        self.members.len()
    }
}

/// Per-class summary used by [`ModelStats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStats {
    pub label: String,
    pub ngrams: usize,
    pub distinct_ngrams: usize,
}

/// Summary of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub ngram_size: usize,
    pub mode: NgramMode,
    pub vocabulary_size: usize,
    pub total_ngrams: u64,
    pub classes: Vec<ClassStats>,
}

/// Frequency statistics learned from a labeled corpus.
///
/// Classes are kept in insertion order: the order in which a label was first
/// seen by [`FrequencyModel::train`] (or the order stored in a snapshot).
/// Scoring iterates classes in this order.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    tokenizer: NgramTokenizer,
    corpus_counts: HashMap<String, u64>,
    classes: Vec<(String, ClassNgrams)>,
    class_index: HashMap<String, usize>,
}

impl FrequencyModel {
    /// Create an empty model.
    pub fn new(tokenizer: NgramTokenizer) -> Self {
        FrequencyModel {
            tokenizer,
            corpus_counts: HashMap::new(),
            classes: Vec::new(),
            class_index: HashMap::new(),
        }
    }

    pub fn tokenizer(&self) -> &NgramTokenizer {
        &self.tokenizer
    }

    pub fn ngram_size(&self) -> usize {
        self.tokenizer.n()
    }

    pub fn mode(&self) -> NgramMode {
        self.tokenizer.mode()
    }

    /// Train on a batch of labeled examples.
    ///
    /// Every label in the batch first has its n-gram list cleared; labels not
    /// in the batch are left as they are. Examples are then tokenized in
    /// input order and each n-gram is counted and appended to its class.
    pub fn train(&mut self, examples: &[TrainingExample]) {
        let mut seen: HashSet<&str> = HashSet::new();
        for example in examples {
            if seen.insert(example.label.as_str()) {
                self.reset_class(&example.label);
            }
        }

        for example in examples {
            for ngram in self.tokenizer.tokenize(&example.words) {
                self.record(&example.label, ngram);
            }
        }
    }

    /// Empty a class's n-gram list, creating the class if it is new.
    ///
    /// The corpus counts contributed by the old list are withdrawn so that
    /// counts keep matching the class lists exactly.
    fn reset_class(&mut self, label: &str) {
        match self.class_index.get(label) {
            Some(&idx) => {
                let old = std::mem::take(&mut self.classes[idx].1);
                for ngram in old.ngrams {
                    if let Some(count) = self.corpus_counts.get_mut(&ngram) {
                        *count -= 1;
                        if *count == 0 {
                            self.corpus_counts.remove(&ngram);
                        }
                    }
                }
            }
            None => {
                self.class_index.insert(label.to_string(), self.classes.len());
                self.classes.push((label.to_string(), ClassNgrams::new()));
            }
        }
    }

    fn record(&mut self, label: &str, ngram: String) {
        *self.corpus_counts.entry(ngram.clone()).or_insert(0) += 1;
        if !self.class_index.contains_key(label) {
            self.reset_class(label);
        }
        let idx = self.class_index[label];
        self.classes[idx].1.push(ngram);
    }

    /// Corpus-wide occurrence count of `ngram`; 0 if never seen.
    pub fn corpus_count(&self, ngram: &str) -> u64 {
        self.corpus_counts.get(ngram).copied().unwrap_or(0)
    }

    pub fn class_ngrams(&self, label: &str) -> Option<&ClassNgrams> {
        self.class_index.get(label).map(|&idx| &self.classes[idx].1)
    }

    /// Class labels in insertion order.
    pub fn class_labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|(label, _)| label.as_str())
    }

    /// Classes with their n-grams, in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassNgrams)> {
        self.classes
            .iter()
            .map(|(label, ngrams)| (label.as_str(), ngrams))
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct n-grams across all classes.
    pub fn vocabulary_size(&self) -> usize {
        self.corpus_counts.len()
    }

    /// True until the model has been trained or loaded with at least one class.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Score already-tokenized `ngrams` against one class.
    ///
    /// Each query n-gram present in the class adds `1 / corpus_count`. Only
    /// presence in the class matters; how often the class saw it does not.
    /// Repeated query n-grams contribute once per occurrence.
    pub fn score(&self, ngrams: &[String], class: &ClassNgrams) -> f64 {
        ngrams
            .iter()
            .filter(|ngram| class.contains(ngram))
            .filter_map(|ngram| self.corpus_counts.get(ngram.as_str()))
            .map(|&count| {
                let weight = 1.0 / count as f64;
                log::trace!("match weight {}", weight);
                weight
            })
            .sum()
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            ngram_size: self.ngram_size(),
            mode: self.mode(),
            vocabulary_size: self.vocabulary_size(),
            total_ngrams: self.corpus_counts.values().sum(),
            classes: self
                .classes
                .iter()
                .map(|(label, ngrams)| ClassStats {
                    label: label.clone(),
                    ngrams: ngrams.len(),
                    distinct_ngrams: ngrams.distinct(),
                })
                .collect(),
        }
    }

    /// Capture the model as a versioned, serializable snapshot.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            version: SNAPSHOT_VERSION,
            ngram_size: self.ngram_size(),
            mode: self.mode(),
            corpus_counts: self
                .corpus_counts
                .iter()
                .map(|(ngram, &count)| (ngram.clone(), count))
                .collect::<BTreeMap<_, _>>(),
            classes: self
                .classes
                .iter()
                .map(|(label, ngrams)| ClassSnapshot {
                    label: label.clone(),
                    ngrams: ngrams.ngrams.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a model from a snapshot, rejecting snapshots whose counts do
    /// not match their class lists.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(LexisError::snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let tokenizer = NgramTokenizer::new(snapshot.ngram_size, snapshot.mode)?;
        let mut model = FrequencyModel::new(tokenizer);

        let mut occurrences: HashMap<&str, u64> = HashMap::new();
        for class in &snapshot.classes {
            for ngram in &class.ngrams {
                *occurrences.entry(ngram.as_str()).or_insert(0) += 1;
            }
        }
        let consistent = occurrences.len() == snapshot.corpus_counts.len()
            && occurrences
                .iter()
                .all(|(ngram, count)| snapshot.corpus_counts.get(*ngram) == Some(count));
        if !consistent {
            return Err(LexisError::snapshot(
                "corpus counts do not match class n-gram lists",
            ));
        }

        for class in snapshot.classes {
            if model.class_index.contains_key(&class.label) {
                return Err(LexisError::snapshot(format!(
                    "duplicate class label `{}`",
                    class.label
                )));
            }
            model
                .class_index
                .insert(class.label.clone(), model.classes.len());
            model
                .classes
                .push((class.label, ClassNgrams::from_ngrams(class.ngrams)));
        }
        model.corpus_counts = snapshot.corpus_counts.into_iter().collect();

        Ok(model)
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self::new(NgramTokenizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(sentence: &str, label: &str) -> TrainingExample {
        TrainingExample::new(sentence.split_whitespace(), label)
    }

    #[test]
    fn test_train_counts() {
        let mut model = FrequencyModel::default();
        model.train(&[
            example("the sky is blue", "weather"),
            example("the sky is grey", "weather"),
            example("the sky is falling", "panic"),
        ]);

        assert_eq!(model.corpus_count("the sky"), 3);
        assert_eq!(model.corpus_count("sky is"), 3);
        assert_eq!(model.corpus_count("is blue"), 1);
        assert_eq!(model.corpus_count("is purple"), 0);

        let weather = model.class_ngrams("weather").unwrap();
        assert_eq!(weather.len(), 6);
        assert_eq!(weather.distinct(), 4);
        assert_eq!(weather.ngrams()[0], "the sky");
        assert_eq!(weather.ngrams()[3], "the sky");
    }

    #[test]
    fn test_class_insertion_order() {
        let mut model = FrequencyModel::default();
        model.train(&[
            example("b c", "second"),
            example("a b", "first"),
            example("c d", "second"),
        ]);
        let labels: Vec<&str> = model.class_labels().collect();
        assert_eq!(labels, vec!["second", "first"]);
    }

    #[test]
    fn test_retraining_overwrites_class() {
        let mut model = FrequencyModel::default();
        model.train(&[example("good morning", "greet"), example("good night", "bye")]);
        model.train(&[example("hello there", "greet")]);

        let greet = model.class_ngrams("greet").unwrap();
        assert_eq!(greet.ngrams(), ["hello there".to_string()]);
        assert!(model.class_ngrams("bye").unwrap().contains("good night"));

        assert_eq!(model.corpus_count("good morning"), 0);
        assert_eq!(model.corpus_count("good night"), 1);
        assert_eq!(model.corpus_count("hello there"), 1);

        let labels: Vec<&str> = model.class_labels().collect();
        assert_eq!(labels, vec!["greet", "bye"]);
    }

    #[test]
    fn test_counts_match_class_lists() {
        let mut model = FrequencyModel::default();
        model.train(&[
            example("a b a b", "x"),
            example("a b c", "y"),
            example("c a b", "x"),
        ]);
        model.train(&[example("a b", "y")]);

        let mut totals: HashMap<String, u64> = HashMap::new();
        for (_, class) in model.classes() {
            for ngram in class.ngrams() {
                *totals.entry(ngram.clone()).or_insert(0) += 1;
            }
        }
        assert_eq!(totals.len(), model.vocabulary_size());
        for (ngram, total) in totals {
            assert_eq!(model.corpus_count(&ngram), total);
        }
    }

    #[test]
    fn test_score_uses_presence_not_frequency() {
        let mut model = FrequencyModel::default();
        model.train(&[
            example("a b a b a b", "x"),
            example("a b", "y"),
        ]);

        // "a b" occurs 4 times overall: 3 in x, 1 in y.
        let query = vec!["a b".to_string()];
        let x = model.score(&query, model.class_ngrams("x").unwrap());
        let y = model.score(&query, model.class_ngrams("y").unwrap());
        assert_eq!(x, 0.25);
        assert_eq!(y, 0.25);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut model = FrequencyModel::new(NgramTokenizer::new(1, NgramMode::Word).unwrap());
        model.train(&[example("red green", "colors"), example("one two two", "numbers")]);

        let restored = FrequencyModel::from_snapshot(model.to_snapshot()).unwrap();

        assert_eq!(restored.ngram_size(), 1);
        assert_eq!(restored.stats(), model.stats());
        assert_eq!(restored.corpus_count("two"), 2);
        assert_eq!(
            restored.class_ngrams("numbers").unwrap().ngrams(),
            model.class_ngrams("numbers").unwrap().ngrams()
        );
    }

    #[test]
    fn test_inconsistent_snapshot_is_rejected() {
        let mut model = FrequencyModel::default();
        model.train(&[example("a b c", "x")]);

        let mut snapshot = model.to_snapshot();
        snapshot.corpus_counts.insert("a b".to_string(), 5);
        assert!(matches!(
            FrequencyModel::from_snapshot(snapshot),
            Err(LexisError::Snapshot(_))
        ));

        let mut snapshot = model.to_snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(FrequencyModel::from_snapshot(snapshot).is_err());
    }

    #[test]
    fn test_stats() {
        let mut model = FrequencyModel::default();
        model.train(&[example("a b c", "x"), example("a b", "y")]);

        let stats = model.stats();
        assert_eq!(stats.ngram_size, 2);
        assert_eq!(stats.vocabulary_size, 2);
        assert_eq!(stats.total_ngrams, 3);
        assert_eq!(stats.classes.len(), 2);
        assert_eq!(stats.classes[0].label, "x");
        assert_eq!(stats.classes[0].ngrams, 2);
    }
}
