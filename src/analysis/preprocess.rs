//! Sentence cleaning helpers applied before tokenization.
//!
//! These are stateless string transforms: contraction expansion, stopword
//! removal, punctuation stripping and a fuzzy similarity ratio. The n-gram
//! tokenizer expects sentences that already went through
//! [`preprocess_sentence`].

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ngram::to_ngrams;

/// English contractions and their expansions.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("'cause", "because"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("daren't", "dare not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("everyone's", "everyone is"),
    ("gimme", "give me"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("I'd", "I would"),
    ("i'd", "i would"),
    ("I'd've", "I would have"),
    ("i'd've", "i would have"),
    ("I'll", "I will"),
    ("i'll", "i will"),
    ("I'm", "I am"),
    ("i'm", "i am"),
    ("I've", "I have"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'd", "it had"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("mustn't've", "must not have"),
    ("needn't", "need not"),
    ("needn't've", "need not have"),
    ("ne'er", "never"),
    ("o'clock", "of the clock"),
    ("ol'", "old"),
    ("oughtn't", "ought not"),
    ("oughtn't've", "ought not have"),
    ("she'd", "she would"),
    ("she'd've", "she would have"),
    ("she'll", "she will"),
    ("she'll've", "she will have"),
    ("she's", "she is"),
    ("shouldn't", "should not"),
    ("so've", "so have"),
    ("so's", "so is"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("that'll", "that will"),
    ("there'd", "there had"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("to've", "to have"),
    ("wasn't", "was not"),
    ("we'd", "we had"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("when've", "when have"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("why've", "why have"),
    ("will've", "will have"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("'tis", "it is"),
];

/// English stopwords.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Every contraction key as one alternation, longest first so "can't've" is
/// not cut short by "can't".
static CONTRACTIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut keys: Vec<&str> = CONTRACTIONS.iter().map(|(k, _)| *k).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let pattern = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("contraction pattern is valid")
});

/// English stopwords as a HashSet.
pub static ENGLISH_STOPWORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Replace every known contraction in `text` with its expansion.
pub fn expand_contractions(text: &str) -> String {
    CONTRACTIONS_REGEX
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            CONTRACTIONS
                .iter()
                .find(|(k, _)| *k == matched)
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}

/// Drop every whitespace-separated token that is a stopword.
pub fn remove_stopwords(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !ENGLISH_STOPWORDS_SET.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim whitespace, then remove ASCII punctuation from both ends (or everywhere, if `all`).
pub fn strip_punctuation(text: &str, all: bool) -> String {
    let trimmed = text.trim();
    if all {
        trimmed
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect()
    } else {
        trimmed
            .trim_matches(|c: char| c.is_ascii_punctuation())
            .to_string()
    }
}

/// Lowercase, expand contractions and strip edge punctuation.
///
/// ```
/// use lexis::analysis::preprocess::preprocess_sentence;
///
/// assert_eq!(preprocess_sentence("What's the weather?"), "what is the weather");
/// ```
pub fn preprocess_sentence(sentence: &str) -> String {
    let expanded = expand_contractions(&sentence.to_lowercase());
    strip_punctuation(&expanded, false)
}

/// Case-insensitive similarity ratio in `[0.0, 1.0]`.
///
/// Computed as `2 * M / T`, where `T` is the combined length and `M` the
/// number of characters in matching blocks: the longest common run is taken,
/// then the same search recurses on the pieces to its left and to its right.
///
/// ```
/// use lexis::analysis::preprocess::string_similarity;
///
/// // "itt" and "n" match: 2 * 4 / 13.
/// assert!((string_similarity("kitten", "sitting") - 8.0 / 13.0).abs() < 1e-9);
/// ```
pub fn string_similarity(first: &str, second: &str) -> f64 {
    let a: Vec<char> = first.to_lowercase().chars().collect();
    let b: Vec<char> = second.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + size..], &b[j + size..])
}

/// Longest common run as `(start in a, start in b, length)`; earliest start wins ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev_row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                row[j + 1] = prev_row[j] + 1;
                if row[j + 1] > best.2 {
                    best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
                }
            }
        }
        prev_row = row;
    }
    best
}

/// Lowercase `line` and keep only `a`-`z` and spaces.
pub fn normalize_chars(line: &str) -> Vec<char> {
    line.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

/// Character n-grams over the [`normalize_chars`] form of `line`.
pub fn char_ngrams(n: usize, line: &str) -> Vec<String> {
    let chars: Vec<String> = normalize_chars(line).into_iter().map(String::from).collect();
    if n == 1 {
        return chars;
    }
    to_ngrams(&chars, n, "")
}
