//! Irregular-inflection exception tables.
//!
//! Each table maps a surface form exactly as written in the source data
//! (case-sensitive) to its base form. Tables are read once from tab-separated
//! files with a `variant` / `root` header and never change afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::{LexisError, Result};

/// Base forms for modal verbs; fixed and not loaded from data.
pub const MODAL_EXCEPTIONS: &[(&str, &str)] = &[
    ("would", "will"),
    ("should", "shall"),
    ("ought", "must"),
    ("could", "can"),
];

const EMBEDDED_NOUNS: &str = include_str!("../../data/exceptions/noun.exc");
const EMBEDDED_ADJECTIVES: &str = include_str!("../../data/exceptions/adj.exc");
const EMBEDDED_ADVERBS: &str = include_str!("../../data/exceptions/adv.exc");
const EMBEDDED_VERBS: &str = include_str!("../../data/exceptions/verb.exc");

/// Word classes that carry an exception table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Adjective,
    Adverb,
    Verb,
}

impl WordClass {
    /// All word classes, in the order their tables are loaded.
    pub const ALL: [WordClass; 4] = [
        WordClass::Noun,
        WordClass::Adjective,
        WordClass::Adverb,
        WordClass::Verb,
    ];

    /// File name of this class's table inside an exceptions directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun.exc",
            WordClass::Adjective => "adj.exc",
            WordClass::Adverb => "adv.exc",
            WordClass::Verb => "verb.exc",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::Adjective => "adjective",
            WordClass::Adverb => "adverb",
            WordClass::Verb => "verb",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExceptionRow {
    variant: String,
    root: String,
}

/// A read-only mapping from inflected surface form to base form.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, String>,
}

impl ExceptionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(variant, root)` pairs. Later pairs win on duplicate variants.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(variant, root)| (variant.into(), root.into()))
            .collect();
        ExceptionTable { entries }
    }

    /// Read a tab-separated table with a `variant` / `root` header.
    ///
    /// Loading is all-or-nothing: the first malformed row fails the whole table.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if !headers.iter().any(|h| h == "variant") || !headers.iter().any(|h| h == "root") {
            return Err(LexisError::exception_table(format!(
                "expected `variant` and `root` columns, found: {}",
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let mut entries = HashMap::new();
        for row in csv_reader.deserialize::<ExceptionRow>() {
            let row = row?;
            entries.insert(row.variant, row.root);
        }

        Ok(ExceptionTable { entries })
    }

    /// Load a table from a file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexisError::exception_table(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    /// Look up the base form of an exact surface form.
    pub fn get(&self, variant: &str) -> Option<&str> {
        self.entries.get(variant).map(String::as_str)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.entries.contains_key(variant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full set of tables consulted by the normalizer.
#[derive(Debug, Clone)]
pub struct ExceptionTables {
    noun: ExceptionTable,
    adjective: ExceptionTable,
    adverb: ExceptionTable,
    verb: ExceptionTable,
    modal: ExceptionTable,
}

impl Default for ExceptionTables {
    fn default() -> Self {
        Self::from_tables(
            ExceptionTable::new(),
            ExceptionTable::new(),
            ExceptionTable::new(),
            ExceptionTable::new(),
        )
    }
}

impl ExceptionTables {
    /// Assemble tables from already-built parts. The modal table is always the fixed one.
    pub fn from_tables(
        noun: ExceptionTable,
        adjective: ExceptionTable,
        adverb: ExceptionTable,
        verb: ExceptionTable,
    ) -> Self {
        ExceptionTables {
            noun,
            adjective,
            adverb,
            verb,
            modal: ExceptionTable::from_pairs(MODAL_EXCEPTIONS.iter().copied()),
        }
    }

    /// Load `noun.exc`, `adj.exc`, `adv.exc` and `verb.exc` from a directory.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        log::info!("Loading exception tables from {}", dir.display());

        let load = |class: WordClass| -> Result<ExceptionTable> {
            let table = ExceptionTable::load_from_file(dir.join(class.file_name()))?;
            log::debug!("Loaded {} {} exceptions", table.len(), class.as_str());
            Ok(table)
        };

        let noun = load(WordClass::Noun)?;
        let adjective = load(WordClass::Adjective)?;
        let adverb = load(WordClass::Adverb)?;
        let verb = load(WordClass::Verb)?;

        Ok(Self::from_tables(noun, adjective, adverb, verb))
    }

    /// Tables bundled with the crate at compile time.
    pub fn embedded() -> Result<Self> {
        log::info!("Loading embedded exception tables");
        Ok(Self::from_tables(
            ExceptionTable::from_reader(EMBEDDED_NOUNS.as_bytes())?,
            ExceptionTable::from_reader(EMBEDDED_ADJECTIVES.as_bytes())?,
            ExceptionTable::from_reader(EMBEDDED_ADVERBS.as_bytes())?,
            ExceptionTable::from_reader(EMBEDDED_VERBS.as_bytes())?,
        ))
    }

    /// The table for a word class.
    pub fn get(&self, class: WordClass) -> &ExceptionTable {
        match class {
            WordClass::Noun => &self.noun,
            WordClass::Adjective => &self.adjective,
            WordClass::Adverb => &self.adverb,
            WordClass::Verb => &self.verb,
        }
    }

    /// The fixed modal verb table.
    pub fn modal(&self) -> &ExceptionTable {
        &self.modal
    }
}
