//! Ordered suffix-stripping rules per word class.
//!
//! Within a class the rules are tried in order and only the first matching
//! one is applied; results are never fed back through the list. More specific
//! suffixes come first so that, for example, `glasses` loses `es` via the
//! `ses` rule instead of only its final `s`.

use super::exceptions::WordClass;

/// Replace a trailing `suffix` with `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, replacement: &'static str) -> Self {
        SuffixRule {
            suffix,
            replacement,
        }
    }

    /// Apply this rule, or return `None` if `word` does not end with the suffix.
    pub fn apply(&self, word: &str) -> Option<String> {
        word.strip_suffix(self.suffix)
            .map(|stem| format!("{}{}", stem, self.replacement))
    }
}

pub const ADJECTIVE_RULES: &[SuffixRule] = &[SuffixRule::new("er", ""), SuffixRule::new("est", "")];

pub const NOUN_RULES: &[SuffixRule] = &[
    SuffixRule::new("ses", "s"),
    SuffixRule::new("xes", "x"),
    SuffixRule::new("zes", "z"),
    SuffixRule::new("ches", "ch"),
    SuffixRule::new("shes", "sh"),
    SuffixRule::new("men", "man"),
    SuffixRule::new("ies", "y"),
    SuffixRule::new("s", ""),
];

pub const VERB_RULES: &[SuffixRule] = &[
    SuffixRule::new("ies", "y"),
    SuffixRule::new("es", ""),
    SuffixRule::new("s", ""),
    SuffixRule::new("ing", ""),
    SuffixRule::new("ed", ""),
];

/// Rules for a word class. Adverbs have none.
pub fn rules_for(class: WordClass) -> &'static [SuffixRule] {
    match class {
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Adverb => &[],
        WordClass::Noun => NOUN_RULES,
        WordClass::Verb => VERB_RULES,
    }
}

/// Apply the first rule in `rules` that matches `word`.
pub fn apply_first(word: &str, rules: &[SuffixRule]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rule() {
        let rule = SuffixRule::new("ches", "ch");
        assert_eq!(rule.apply("churches"), Some("church".to_string()));
        assert_eq!(rule.apply("church"), None);
    }

    #[test]
    fn test_noun_rule_order() {
        assert_eq!(apply_first("glasses", NOUN_RULES), Some("glass".to_string()));
        assert_eq!(apply_first("boxes", NOUN_RULES), Some("box".to_string()));
        assert_eq!(apply_first("buzzes", NOUN_RULES), Some("buzz".to_string()));
        assert_eq!(apply_first("dishes", NOUN_RULES), Some("dish".to_string()));
        assert_eq!(apply_first("firemen", NOUN_RULES), Some("fireman".to_string()));
        assert_eq!(apply_first("cities", NOUN_RULES), Some("city".to_string()));
        assert_eq!(apply_first("dogs", NOUN_RULES), Some("dog".to_string()));
        assert_eq!(apply_first("sheep", NOUN_RULES), None);
    }

    #[test]
    fn test_verb_rule_order() {
        assert_eq!(apply_first("carries", VERB_RULES), Some("carry".to_string()));
        assert_eq!(apply_first("goes", VERB_RULES), Some("go".to_string()));
        assert_eq!(apply_first("walks", VERB_RULES), Some("walk".to_string()));
        assert_eq!(apply_first("walking", VERB_RULES), Some("walk".to_string()));
        assert_eq!(apply_first("walked", VERB_RULES), Some("walk".to_string()));
    }

    #[test]
    fn test_rules_are_not_chained() {
        // "er" is stripped once; the remaining "er" stays.
        assert_eq!(apply_first("bigerer", ADJECTIVE_RULES), Some("biger".to_string()));
        assert_eq!(apply_first("tallest", ADJECTIVE_RULES), Some("tall".to_string()));
    }

    #[test]
    fn test_adverbs_have_no_rules() {
        assert!(rules_for(WordClass::Adverb).is_empty());
        assert_eq!(apply_first("quickly", rules_for(WordClass::Adverb)), None);
    }
}
