//! # Lexis
//!
//! Small natural-language utilities for English text.
//!
//! ## Features
//!
//! - Tag-driven morphological normalization with exception tables
//! - Word and character n-gram tokenization
//! - N-gram frequency classifier with ambiguity detection
//! - Durable model snapshots (bincode or JSON)
//! - Sentence cleaning helpers and scripted dialogue trees

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod dialogue;
pub mod error;
pub mod morphology;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
