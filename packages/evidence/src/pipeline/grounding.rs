//! Candidate extraction from raw grounding metadata.
//!
//! Normalizes the heterogeneous chunk list a search-augmented response
//! carries into an ordered, deduplicated list of candidate sources. Chunks
//! without a usable URL are dropped; a missing title gets a generic
//! placeholder. Zero chunks in means zero candidates out — "no evidence
//! available", not an error.

use indexmap::IndexMap;
use tracing::debug;

use crate::types::candidate::{normalize_uri, Candidate};
use crate::types::grounding::RawGroundingChunk;

/// Title used when the search tool reported none.
pub const FALLBACK_TITLE: &str = "Source";

/// Extract candidate sources from grounding chunks.
///
/// Deduplicates by normalized URI, preserving first-seen order.
pub fn extract_candidates(chunks: &[RawGroundingChunk]) -> Vec<Candidate> {
    let mut seen: IndexMap<String, Candidate> = IndexMap::new();

    for chunk in chunks {
        let Some(web) = chunk.web.as_ref() else {
            continue;
        };
        let Some(raw_uri) = web.uri.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
            continue;
        };

        let uri = normalize_uri(raw_uri);
        let title = web
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_TITLE)
            .to_string();

        seen.entry(uri.clone())
            .or_insert_with(|| Candidate::new(title, uri));
    }

    debug!(chunks = chunks.len(), candidates = seen.len(), "extracted grounding candidates");
    seen.into_values().collect()
}
