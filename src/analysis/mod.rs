//! Text analysis: sentence cleaning and n-gram tokenization.

pub mod ngram;
pub mod preprocess;

// Re-export commonly used types
pub use ngram::{NgramMode, NgramTokenizer, to_ngrams};
pub use preprocess::{
    char_ngrams, expand_contractions, normalize_chars, preprocess_sentence, remove_stopwords,
    string_similarity, strip_punctuation,
};
