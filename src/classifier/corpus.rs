//! Labeled training data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::analysis::preprocess::preprocess_sentence;
use crate::error::Result;

/// A cleaned word sequence and the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub words: Vec<String>,
    pub label: String,
}

impl TrainingExample {
    pub fn new<I, S, L>(words: I, label: L) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        L: Into<String>,
    {
        TrainingExample {
            words: words.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// Clean a raw sentence with [`preprocess_sentence`] and split it into words.
    pub fn from_sentence<L: Into<String>>(sentence: &str, label: L) -> Self {
        let cleaned = preprocess_sentence(sentence);
        Self::new(cleaned.split_whitespace(), label)
    }
}

#[derive(Debug, Deserialize)]
struct CorpusRow {
    sentence: String,
    class: String,
}

/// Read a tab-separated corpus with `sentence` and `class` columns.
pub fn read_training_data<R: Read>(reader: R) -> Result<Vec<TrainingExample>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .from_reader(reader);

    let mut examples = Vec::new();
    for row in csv_reader.deserialize::<CorpusRow>() {
        let row = row?;
        examples.push(TrainingExample::from_sentence(&row.sentence, row.class));
    }
    Ok(examples)
}

/// Load a training corpus from a TSV file.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let examples = read_training_data(File::open(path)?)?;
    log::info!(
        "Loaded {} training examples from {}",
        examples.len(),
        path.display()
    );
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sentence() {
        let example = TrainingExample::from_sentence("What's the TIME?", "time");
        assert_eq!(example.words, vec!["what", "is", "the", "time"]);
        assert_eq!(example.label, "time");
    }

    #[test]
    fn test_read_training_data() {
        let data = "class\tsentence\ngreeting\tHello there!\nfarewell\tSee you later.\n";
        let examples = read_training_data(data.as_bytes()).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], TrainingExample::new(["hello", "there"], "greeting"));
        assert_eq!(examples[1].words, vec!["see", "you", "later"]);
    }

    #[test]
    fn test_missing_column() {
        let data = "label\ttext\ngreeting\thello\n";
        assert!(read_training_data(data.as_bytes()).is_err());
    }
}
