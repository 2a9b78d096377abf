//! Configuration for the n-gram classifier.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::snapshot::SnapshotFormat;
use crate::analysis::ngram::{NgramMode, NgramTokenizer};
use crate::error::Result;

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_PATH: &str = "default-classifier.bin";

/// Configuration for an [`NgramClassifier`](super::NgramClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Window size of the n-grams.
    pub ngram_size: usize,
    /// Word or character n-grams.
    pub mode: NgramMode,
    /// Where trained models are written and loaded from.
    pub snapshot_path: PathBuf,
    /// Snapshot encoding; inferred from the path's extension when unset.
    pub snapshot_format: Option<SnapshotFormat>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ngram_size: 2,
            mode: NgramMode::Word,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            snapshot_format: None,
        }
    }
}

impl ClassifierConfig {
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    pub fn with_mode(mut self, mode: NgramMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.snapshot_path = path.into();
        self
    }

    pub fn with_snapshot_format(mut self, format: SnapshotFormat) -> Self {
        self.snapshot_format = Some(format);
        self
    }

    /// Tokenizer described by this configuration.
    pub fn tokenizer(&self) -> Result<NgramTokenizer> {
        NgramTokenizer::new(self.ngram_size, self.mode)
    }

    /// Effective snapshot format.
    pub fn format(&self) -> SnapshotFormat {
        self.snapshot_format
            .unwrap_or_else(|| SnapshotFormat::from_path(&self.snapshot_path))
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.mode, NgramMode::Word);
        assert_eq!(config.snapshot_path, PathBuf::from("default-classifier.bin"));
        assert_eq!(config.format(), SnapshotFormat::Binary);
    }

    #[test]
    fn test_format_inference() {
        let config = ClassifierConfig::default().with_snapshot_path("model.json");
        assert_eq!(config.format(), SnapshotFormat::Json);

        let config = config.with_snapshot_format(SnapshotFormat::Binary);
        assert_eq!(config.format(), SnapshotFormat::Binary);
    }

    #[test]
    fn test_partial_json() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"ngram_size": 3, "mode": "character"}"#).unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.mode, NgramMode::Character);
        assert_eq!(config.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
    }

    #[test]
    fn test_invalid_ngram_size() {
        let config = ClassifierConfig::default().with_ngram_size(0);
        assert!(config.tokenizer().is_err());
    }
}
