//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexisError`] enum. Construction-time failures (a missing exception table,
//! a corrupt model snapshot) surface here; per-request outcomes such as an
//! unknown part-of-speech tag or a sentence matching no class are not errors.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::analysis("ngram size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (exception tables, snapshots, corpora).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Tabular input that could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model snapshot could not be written or read back.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Analysis-related errors (tokenizer configuration and the like).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Exception table is missing or malformed.
    #[error("Exception table error: {0}")]
    ExceptionTable(String),

    /// Dialogue tree errors.
    #[error("Dialogue error: {0}")]
    Dialogue(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        LexisError::Snapshot(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new exception table error.
    pub fn exception_table<S: Into<String>>(msg: S) -> Self {
        LexisError::ExceptionTable(msg.into())
    }

    /// Create a new dialogue error.
    pub fn dialogue<S: Into<String>>(msg: S) -> Self {
        LexisError::Dialogue(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidArgument(msg.into())
    }
}

impl From<bincode::Error> for LexisError {
    fn from(err: bincode::Error) -> Self {
        LexisError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::snapshot("bad version");
        assert_eq!(error.to_string(), "Snapshot error: bad version");

        let error = LexisError::analysis("ngram size must be at least 1");
        assert_eq!(
            error.to_string(),
            "Analysis error: ngram size must be at least 1"
        );

        let error = LexisError::exception_table("missing noun table");
        assert_eq!(
            error.to_string(),
            "Exception table error: missing noun table"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_at_process_boundary() {
        use anyhow::Context;

        let result: Result<()> = Err(LexisError::snapshot("bad version"));
        let error = result.context("lexis classify failed").unwrap_err();

        assert_eq!(error.to_string(), "lexis classify failed");
        assert_eq!(error.root_cause().to_string(), "Snapshot error: bad version");
        assert!(matches!(
            error.downcast_ref::<LexisError>(),
            Some(LexisError::Snapshot(_))
        ));
    }
}
