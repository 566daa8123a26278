//! Constrained citation extraction.
//!
//! The second model call: given the free-text answer and the trusted
//! candidate list, ask the model to cite candidates by index under a fixed
//! output schema. The model has no URL field to fill in, so a fabricated
//! URL cannot even be expressed in the response.

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::pipeline::prompts::{format_citation_prompt, render_candidate_listing};
use crate::traits::model::GenerativeModel;
use crate::types::candidate::TrustedCandidates;

/// One citation as drafted by the model. Untrusted until validated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CitationDraft {
    /// Index into the trusted candidate list
    pub url_index: i64,

    /// Enhanced source title
    #[serde(default)]
    pub title: String,

    /// Publication year, or "N/A" when not determinable
    #[serde(default = "default_year")]
    pub year: String,

    /// Short quotation or finding (at most 3 sentences)
    #[serde(default)]
    pub reference: String,
}

fn default_year() -> String {
    "N/A".to_string()
}

/// The envelope the constrained call must return.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CitationDraftBatch {
    pub sources: Vec<CitationDraft>,
}

/// Drafts parsed out of a structured response, plus how many elements could
/// not be read at all. Malformed elements never abort the batch.
#[derive(Debug, Clone, Default)]
pub struct DraftBatch {
    pub drafts: Vec<CitationDraft>,
    pub malformed: usize,
}

/// The fixed output schema for the constrained call.
///
/// Derived from [`CitationDraftBatch`], with generator metadata keys
/// stripped so providers that take a bare OpenAPI-style schema accept it.
pub fn draft_schema() -> Value {
    let mut value = serde_json::to_value(schema_for!(CitationDraftBatch)).unwrap_or(Value::Null);
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }
    value
}

/// Schema for the semantic-match call: an object with an array of id
/// strings.
pub fn match_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "matches": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["matches"]
    })
}

/// Find the array of draft entries in a structured response.
///
/// Prefers the named `sources` field; a model that nests the array under
/// some other key falls back to the first array-valued field. This is the
/// single tolerated reshaping of malformed model JSON; nothing else in the
/// crate guesses at shapes.
fn find_entry_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map
            .get("sources")
            .and_then(Value::as_array)
            .or_else(|| map.values().find_map(|v| v.as_array())),
        _ => None,
    }
}

/// Parse a structured response into drafts, tolerating bad elements.
pub fn parse_draft_batch(value: Value) -> DraftBatch {
    let Some(entries) = find_entry_array(&value) else {
        return DraftBatch::default();
    };

    let mut batch = DraftBatch::default();
    for entry in entries {
        match serde_json::from_value::<CitationDraft>(entry.clone()) {
            Ok(draft) => batch.drafts.push(draft),
            Err(error) => {
                warn!(%error, "skipping malformed citation draft");
                batch.malformed += 1;
            }
        }
    }
    batch
}

/// Run the constrained extraction call.
///
/// With an empty trusted list the call is skipped entirely and an empty
/// batch returned: a model given zero valid reference targets can only
/// hallucinate.
pub async fn extract_citations<M: GenerativeModel>(
    model: &M,
    query: &str,
    answer: &str,
    trusted: &TrustedCandidates,
) -> Result<DraftBatch> {
    if trusted.is_empty() {
        return Ok(DraftBatch::default());
    }

    let listing = render_candidate_listing(trusted.iter());
    let prompt = format_citation_prompt(query, answer, &listing);
    let value = model.generate_structured(&prompt, draft_schema()).await?;
    Ok(parse_draft_batch(value))
}

/// Coerce a structured response into a list of identifier strings.
///
/// A bare array is taken as-is (numbers stringified); an object falls back
/// to its first array-valued field; anything else is empty.
pub fn coerce_id_list(value: &Value) -> Vec<String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.values().find_map(|v| v.as_array()) {
            Some(items) => items,
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}
