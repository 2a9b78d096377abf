//! N-gram frequency classifier.
//!
//! Training records, per class, the n-grams of every example sentence along
//! with a corpus-wide count of each n-gram. A query scores `1 / count` for
//! every n-gram it shares with a class, so rare shared phrases weigh more
//! than common ones.
//!
//! # Architecture
//!
//! - `TextClassifier` trait: common interface taking raw sentences
//! - `NgramClassifier`: training, scoring and persistence
//! - `FrequencyModel`: the learned counts and per-class n-gram lists
//! - `ModelSnapshot`: versioned on-disk form (bincode or JSON)
//! - `TrainingExample`: a cleaned word sequence and its label
//!
//! # Example
//!
//! ```rust,no_run
//! use lexis::classifier::{ClassifierConfig, NgramClassifier, TrainingExample};
//!
//! # fn main() -> lexis::error::Result<()> {
//! let examples = vec![
//!     TrainingExample::from_sentence("What's the weather like?", "weather"),
//!     TrainingExample::from_sentence("I'd like a pizza, please.", "food"),
//! ];
//!
//! let config = ClassifierConfig::default().with_snapshot_path("model.bin");
//! let mut classifier = NgramClassifier::new(config)?;
//! classifier.train(&examples)?;
//!
//! let result = classifier.classify(&["the", "weather", "like"]);
//! if let Some(label) = result.confident_label() {
//!     println!("{label} ({:.3})", result.score);
//! }
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod corpus;
mod model;
mod ngram_classifier;
mod snapshot;
mod types;

// Public exports
pub use classifier::TextClassifier;
pub use config::{ClassifierConfig, DEFAULT_SNAPSHOT_PATH};
pub use corpus::{load_training_data, read_training_data, TrainingExample};
pub use model::{ClassNgrams, ClassStats, FrequencyModel, ModelStats};
pub use ngram_classifier::NgramClassifier;
pub use snapshot::{
    load_snapshot, save_snapshot, ClassSnapshot, ModelSnapshot, SnapshotFormat, SNAPSHOT_VERSION,
};
pub use types::{ClassScore, Classification};
