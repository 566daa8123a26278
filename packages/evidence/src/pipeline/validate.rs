//! Validation of model-drafted citations against the trusted list.
//!
//! The validator is the last line against fabricated references: an index
//! must be an in-range integer, and the emitted URI always comes from the
//! trusted candidate list, never from anything the model wrote. Bad drafts
//! are dropped one by one; a partially valid batch still yields its valid
//! subset.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::pipeline::extract::DraftBatch;
use crate::types::candidate::TrustedCandidates;
use crate::types::citation::Citation;

/// Outcome of validating one batch of drafts.
#[derive(Debug, Clone, Default)]
pub struct Validated {
    /// Citations that survived, in draft order, deduplicated by URI
    pub citations: Vec<Citation>,

    /// Drafts rejected: malformed elements plus out-of-range indices
    pub rejected: usize,
}

/// Validate drafts, mapping each accepted one to its real candidate.
pub fn validate(batch: DraftBatch, trusted: &TrustedCandidates) -> Validated {
    let mut validated = Validated {
        rejected: batch.malformed,
        ..Validated::default()
    };
    let mut seen: HashSet<String> = HashSet::new();

    for draft in batch.drafts {
        let candidate = usize::try_from(draft.url_index)
            .ok()
            .and_then(|index| trusted.get(index));
        let Some(candidate) = candidate else {
            warn!(index = draft.url_index, len = trusted.len(), "citation index out of range");
            validated.rejected += 1;
            continue;
        };

        if !seen.insert(candidate.uri.clone()) {
            debug!(uri = %candidate.uri, "dropping duplicate citation");
            continue;
        }

        let title = if draft.title.trim().is_empty() {
            candidate.title.clone()
        } else {
            draft.title
        };

        validated.citations.push(Citation {
            title,
            uri: candidate.uri.clone(),
            date: draft.year,
            reference: draft.reference,
        });
    }

    validated
}
