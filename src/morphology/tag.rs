//! Coarse part-of-speech categories.

use std::fmt;

use super::exceptions::WordClass;

/// Coarse word-class category derived from a raw tagger tag.
///
/// The tag taxonomy belongs to the tagger; only the presence of a marker
/// (`JJ`, `RB`, `NN`, `VB`, `MD`) is inspected, in that order, so `JJR`,
/// `NNS`, `VBD` and similar refinements fall into their base category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Adjective,
    Adverb,
    Noun,
    Verb,
    Modal,
    /// Any tag outside the handled classes; normalization passes words through.
    Other,
}

impl TagCategory {
    const MARKERS: [(&'static str, TagCategory); 5] = [
        ("JJ", TagCategory::Adjective),
        ("RB", TagCategory::Adverb),
        ("NN", TagCategory::Noun),
        ("VB", TagCategory::Verb),
        ("MD", TagCategory::Modal),
    ];

    /// Classify a raw tag string.
    pub fn from_tag(tag: &str) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| tag.contains(marker))
            .map(|(_, category)| *category)
            .unwrap_or(TagCategory::Other)
    }

    /// The exception-table word class for this category, if it has one.
    pub fn word_class(&self) -> Option<WordClass> {
        match self {
            TagCategory::Adjective => Some(WordClass::Adjective),
            TagCategory::Adverb => Some(WordClass::Adverb),
            TagCategory::Noun => Some(WordClass::Noun),
            TagCategory::Verb => Some(WordClass::Verb),
            TagCategory::Modal | TagCategory::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Adjective => "adjective",
            TagCategory::Adverb => "adverb",
            TagCategory::Noun => "noun",
            TagCategory::Verb => "verb",
            TagCategory::Modal => "modal",
            TagCategory::Other => "other",
        }
    }
}

impl From<&str> for TagCategory {
    fn from(tag: &str) -> Self {
        TagCategory::from_tag(tag)
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
