//! Text classifier trait definition.

use crate::classifier::types::Classification;
use crate::error::Result;

/// Text classifier trait.
///
/// Implementations take a raw sentence, clean and tokenize it the same way
/// they were trained, and return the best class.
pub trait TextClassifier: Send + Sync {
    /// Predict the class of a raw sentence.
    ///
    /// # Arguments
    /// * `sentence` - The sentence to classify
    ///
    /// # Returns
    /// The predicted [`Classification`]; a sentence matching nothing is a
    /// normal result, not an error.
    fn predict(&self, sentence: &str) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
