//! Validated citations — the unit of output the caller renders.

use serde::{Deserialize, Serialize};

/// A validated, display-ready citation.
///
/// `uri` is always copied from the trusted candidate list, never taken from
/// model text, so every citation traces to a URL the search step actually
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source title (the model's enhanced title when it gave one)
    pub title: String,

    /// The trusted candidate's URI
    pub uri: String,

    /// Publication year, or "N/A"
    pub date: String,

    /// Short quotation or finding supporting the answer
    pub reference: String,
}

/// The unit returned to the caller. May be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueResult {
    pub sources: Vec<Citation>,
}

impl DialogueResult {
    /// A result with no sources.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a citation list.
    pub fn from_citations(sources: Vec<Citation>) -> Self {
        Self { sources }
    }

    /// Whether any source survived validation.
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
