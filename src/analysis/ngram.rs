//! Word and character n-gram tokenizer.

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// How the units of an n-gram window are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NgramMode {
    /// Units are words, joined with a single space.
    #[default]
    Word,
    /// Units are concatenated. Feed single characters as units to get
    /// character n-grams.
    Character,
}

impl NgramMode {
    /// The string placed between units of a window.
    pub fn joiner(&self) -> &'static str {
        match self {
            NgramMode::Word => " ",
            NgramMode::Character => "",
        }
    }
}

/// Build every contiguous window of `n` units, joined with `joiner`.
///
/// `n == 1` returns the units unchanged. Fewer than `n` units (or `n == 0`)
/// yields no windows.
///
/// ```
/// use lexis::analysis::ngram::to_ngrams;
///
/// assert_eq!(to_ngrams(&["a", "b", "c"], 2, " "), vec!["a b", "b c"]);
/// assert_eq!(to_ngrams(&["a"], 2, " "), Vec::<String>::new());
/// ```
pub fn to_ngrams<S: AsRef<str>>(units: &[S], n: usize, joiner: &str) -> Vec<String> {
    if n == 1 {
        return units.iter().map(|u| u.as_ref().to_string()).collect();
    }
    if n == 0 || units.len() < n {
        return Vec::new();
    }

    units
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(|unit| unit.as_ref())
                .collect::<Vec<&str>>()
                .join(joiner)
        })
        .collect()
}

/// A tokenizer with a fixed window size and join mode.
///
/// The same instance configuration must be used for training and scoring so
/// that both sides produce comparable n-grams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramTokenizer {
    n: usize,
    mode: NgramMode,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is 0.
    pub fn new(n: usize, mode: NgramMode) -> Result<Self> {
        if n == 0 {
            return Err(LexisError::analysis("ngram size must be at least 1"));
        }
        Ok(NgramTokenizer { n, mode })
    }

    /// Word bigram tokenizer.
    pub fn bigram() -> Self {
        NgramTokenizer {
            n: 2,
            mode: NgramMode::Word,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn mode(&self) -> NgramMode {
        self.mode
    }

    /// Turn a sequence of already-split units into n-grams.
    pub fn tokenize<S: AsRef<str>>(&self, units: &[S]) -> Vec<String> {
        to_ngrams(units, self.n, self.mode.joiner())
    }
}

impl Default for NgramTokenizer {
    fn default() -> Self {
        Self::bigram()
    }
}
