//! Common types for classification results.

use serde::{Deserialize, Serialize};

/// Outcome of scoring a sentence against every class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Best-scoring class, or `None` when no class matched at all.
    pub label: Option<String>,
    /// Score of the best class; 0 when nothing matched.
    pub score: f64,
    /// False when another class tied the leading score. An untrusted result
    /// is ambiguous and should not be acted on automatically.
    pub trusted: bool,
}

impl Classification {
    /// The result for a sentence that shares no n-gram with any class.
    pub fn no_match() -> Self {
        Classification {
            label: None,
            score: 0.0,
            trusted: true,
        }
    }

    /// Whether some class matched.
    pub fn is_match(&self) -> bool {
        self.label.is_some()
    }

    /// The label, but only if the result is a trusted match.
    pub fn confident_label(&self) -> Option<&str> {
        if self.trusted {
            self.label.as_deref()
        } else {
            None
        }
    }
}

/// Score of one class for a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub label: String,
    pub score: f64,
}
