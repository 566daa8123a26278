//! Grounded Citation Retrieval Library
//!
//! Retrieves citation-backed evidence for human-rights research from a
//! search-augmented generative model: legal instruments for a right,
//! current-situation reports from monitoring organizations, or open-access
//! academic work connecting two rights.
//!
//! # Design Philosophy
//!
//! **"Every citation traces to a URL the search actually returned"**
//!
//! Search-augmented models happily invent plausible-looking references. The
//! pipeline makes that structurally impossible rather than asking nicely:
//!
//! - Candidates come only from the response's grounding metadata
//! - A curated trust policy filters them per evidence category
//! - The extraction call may cite candidates *only by index* into the
//!   filtered list; the output schema has no URL field to fill in
//! - The validator maps indices back to the real URIs and drops anything
//!   out of range
//! - Zero trusted candidates means zero citations and zero extraction
//!   calls, never a fabricated source
//!
//! # Usage
//!
//! ```rust,ignore
//! use evidence::{Retriever, Scope};
//! use evidence::ai::Gemini;
//!
//! let retriever = Retriever::new(Gemini::from_env()?);
//!
//! // Legal instruments for one right
//! let legal = retriever
//!     .legal_framework("freedom of expression", &Scope::regional("Europe"))
//!     .await;
//!
//! // Research connecting two rights
//! let nexus = retriever
//!     .nexus("right to education", "freedom of expression", &Scope::international())
//!     .await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The injected model capability ([`GenerativeModel`])
//! - [`types`] - Domain data types
//! - [`pipeline`] - The retrieval pipeline and its stages
//! - [`testing`] - Mock model for testing without network access

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{Result, RetrievalError};
pub use traits::model::GenerativeModel;
pub use types::{
    candidate::{normalize_uri, Candidate, TrustedCandidates},
    citation::{Citation, DialogueResult},
    config::RetrievalConfig,
    grounding::{GroundedAnswer, RawGroundingChunk, WebSource},
    right::{Right, RightCategory, Scope, ScopeLevel},
};

// Re-export pipeline components
pub use pipeline::{
    // Policy
    admits, filter_candidates, is_accessible, is_trusted, EvidenceCategory,
    // Candidate extraction
    extract_candidates,
    // Query composition
    compose_field_status, compose_legal, compose_nexus,
    // Constrained extraction
    coerce_id_list, extract_citations, CitationDraft, DraftBatch,
    // Validation
    validate, Validated,
    // Orchestration
    Retriever,
};

// Re-export testing utilities
pub use testing::{MockCall, MockModel};
