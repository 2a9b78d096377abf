//! Morphological normalization.
//!
//! Reduces inflected English words to base forms using per-class exception
//! tables and ordered suffix rules, dispatched on a part-of-speech tag.
//!
//! # Example
//!
//! ```
//! use lexis::morphology::Normalizer;
//!
//! # fn main() -> lexis::error::Result<()> {
//! let normalizer = Normalizer::embedded()?;
//!
//! assert_eq!(normalizer.normalize("mice", Some("NNS")), "mouse");
//! assert_eq!(normalizer.normalize("glasses", Some("NNS")), "glass");
//! assert_eq!(normalizer.normalize("glasses", None), "glasses");
//! # Ok(())
//! # }
//! ```

pub mod exceptions;
pub mod normalizer;
pub mod rules;
pub mod tag;
pub mod tagger;

pub use exceptions::{ExceptionTable, ExceptionTables, WordClass};
pub use normalizer::{Normalizer, NormalizerConfig};
pub use rules::SuffixRule;
pub use tag::TagCategory;
pub use tagger::{SlashTagger, TaggedWord, Tagger};
