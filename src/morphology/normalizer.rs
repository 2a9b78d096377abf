//! Tag-driven base form normalizer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::exceptions::ExceptionTables;
use super::rules;
use super::tag::TagCategory;
use super::tagger::{TaggedWord, Tagger};
use crate::error::Result;

/// Where a [`Normalizer`] gets its exception tables from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Directory holding `noun.exc`, `adj.exc`, `adv.exc` and `verb.exc`.
    /// When unset, the tables bundled with the crate are used.
    pub exceptions_dir: Option<PathBuf>,
}

/// Reduces inflected words to their base form.
///
/// The tag decides the word class. Within a class the exception table is
/// consulted first, then the class's suffix rules; a word that matches
/// neither comes back unchanged. Without a tag the word is never touched.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tables: ExceptionTables,
}

impl Normalizer {
    pub fn new(tables: ExceptionTables) -> Self {
        Normalizer { tables }
    }

    /// Build a normalizer from the tables bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(ExceptionTables::embedded()?))
    }

    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let tables = match &config.exceptions_dir {
            Some(dir) => ExceptionTables::load_from_dir(dir)?,
            None => ExceptionTables::embedded()?,
        };
        Ok(Self::new(tables))
    }

    pub fn tables(&self) -> &ExceptionTables {
        &self.tables
    }

    /// Normalize a word given the tag produced for it, if any.
    pub fn normalize(&self, word: &str, tag: Option<&str>) -> String {
        match tag {
            Some(tag) => self.normalize_category(word, TagCategory::from_tag(tag)),
            None => word.to_string(),
        }
    }

    /// Normalize a word for an already-derived tag category.
    pub fn normalize_category(&self, word: &str, category: TagCategory) -> String {
        let base = match category.word_class() {
            Some(class) => self
                .tables
                .get(class)
                .get(word)
                .map(str::to_string)
                .or_else(|| rules::apply_first(word, rules::rules_for(class))),
            None if category == TagCategory::Modal => {
                self.tables.modal().get(word).map(str::to_string)
            }
            None => None,
        };

        base.unwrap_or_else(|| word.to_string())
    }

    /// Normalize every tagged word, preserving order. Untagged words pass through.
    pub fn normalize_tagged(&self, words: &[TaggedWord]) -> Vec<String> {
        words
            .iter()
            .map(|tagged| self.normalize(&tagged.word, tagged.tag.as_deref()))
            .collect()
    }

    /// Normalize `(word, tag)` pairs, preserving order.
    pub fn normalize_pairs<W: AsRef<str>, T: AsRef<str>>(
        &self,
        pairs: &[(W, Option<T>)],
    ) -> Vec<String> {
        pairs
            .iter()
            .map(|(word, tag)| self.normalize(word.as_ref(), tag.as_ref().map(|tag| tag.as_ref())))
            .collect()
    }

    /// Tag a sentence with `tagger` and normalize the result.
    pub fn normalize_sentence(&self, tagger: &dyn Tagger, sentence: &str) -> Result<Vec<String>> {
        let tagged = tagger.tag(sentence)?;
        log::trace!("{} tagged {} words", tagger.name(), tagged.len());
        Ok(self.normalize_tagged(&tagged))
    }
}

impl Default for Normalizer {
    /// A normalizer with empty word-class tables; only suffix rules and modals apply.
    fn default() -> Self {
        Self::new(ExceptionTables::default())
    }
}
