//! Part-of-speech tagger seam.
//!
//! Tagging itself is out of scope for this crate; a real tagger is plugged in
//! through the [`Tagger`] trait. [`SlashTagger`] reads tags that are already
//! present in the text (`word/TAG`) and is what the CLI uses.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A word paired with the tag assigned by a tagger, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: Option<String>,
}

impl TaggedWord {
    pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
        TaggedWord {
            word: word.into(),
            tag: Some(tag.into()),
        }
    }

    /// A word the tagger could not tag.
    pub fn untagged<W: Into<String>>(word: W) -> Self {
        TaggedWord {
            word: word.into(),
            tag: None,
        }
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, Option<T>)> for TaggedWord {
    fn from((word, tag): (W, Option<T>)) -> Self {
        TaggedWord {
            word: word.into(),
            tag: tag.map(Into::into),
        }
    }
}

/// Assigns a part-of-speech tag to every word of a sentence.
pub trait Tagger: Send + Sync {
    /// Tag a sentence, preserving word order.
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>>;

    /// Get the name of this tagger for debugging and logging.
    fn name(&self) -> &str;
}

/// Tagger for pre-tagged text in `word/TAG` form.
///
/// Whitespace-separated tokens are split at their last `/`; tokens without
/// one, or with an empty tag after it, receive the default tag. The default
/// tagger leaves such tokens untagged.
#[derive(Debug, Clone, Default)]
pub struct SlashTagger {
    default_tag: Option<String>,
}

impl SlashTagger {
    pub fn new<S: Into<String>>(default_tag: S) -> Self {
        SlashTagger {
            default_tag: Some(default_tag.into()),
        }
    }

    /// Split a single `word/TAG` token.
    pub fn parse_token(&self, token: &str) -> TaggedWord {
        match token.rsplit_once('/') {
            Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                TaggedWord::new(word, tag)
            }
            Some((word, _)) if !word.is_empty() => TaggedWord {
                word: word.to_string(),
                tag: self.default_tag.clone(),
            },
            _ => TaggedWord {
                word: token.to_string(),
                tag: self.default_tag.clone(),
            },
        }
    }
}

impl Tagger for SlashTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>> {
        Ok(sentence
            .split_whitespace()
            .map(|token| self.parse_token(token))
            .collect())
    }

    fn name(&self) -> &str {
        "slash"
    }
}
