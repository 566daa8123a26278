//! Retrieval pipeline - the core of the library.
//!
//! The pipeline turns one evidence request into validated citations:
//! - Query composition per evidence category
//! - Search-augmented generation (call A)
//! - Candidate extraction from grounding metadata
//! - Domain trust / accessibility filtering
//! - Index-bound constrained extraction (call B)
//! - Validation and deduplication

pub mod extract;
pub mod grounding;
pub mod policy;
pub mod prompts;
pub mod retriever;
pub mod validate;

pub use extract::{
    coerce_id_list, draft_schema, extract_citations, match_schema, parse_draft_batch,
    CitationDraft, CitationDraftBatch, DraftBatch,
};
pub use grounding::{extract_candidates, FALLBACK_TITLE};
pub use policy::{admits, filter_candidates, is_accessible, is_trusted, EvidenceCategory};
pub use prompts::{
    compose_field_status, compose_legal, compose_nexus, format_citation_prompt,
    format_semantic_match_prompt, render_candidate_listing, CITATION_PROMPT,
    SEMANTIC_MATCH_PROMPT,
};
pub use retriever::Retriever;
pub use validate::{validate, Validated};
