//! Boundary types for search-grounding metadata.
//!
//! Providers attach grounding metadata to a search-augmented response in a
//! loose shape: chunks may or may not carry a web source, and a web source
//! may or may not carry a title or URI. Rather than trusting that shape
//! throughout the pipeline, these types make every field explicitly
//! optional and leave validation and defaulting to the candidate extractor.

use serde::{Deserialize, Serialize};

/// One raw grounding chunk as attached by the provider's search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGroundingChunk {
    /// The web source this chunk points at, if any.
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web page referenced by a grounding chunk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// The result of a search-augmented generation call: the free-text answer
/// plus the grounding chunks the search surfaced.
///
/// An empty `chunks` list means the provider declined to ground (or
/// grounding is disabled) — downstream that is "no evidence available",
/// never an error.
#[derive(Debug, Clone, Default)]
pub struct GroundedAnswer {
    /// Raw text of the answer.
    pub text: String,

    /// Grounding metadata, possibly empty.
    pub chunks: Vec<RawGroundingChunk>,
}

impl GroundedAnswer {
    /// Create an answer with no grounding.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chunks: Vec::new(),
        }
    }

    /// Attach a web-sourced grounding chunk.
    pub fn with_source(mut self, title: impl Into<String>, uri: impl Into<String>) -> Self {
        self.chunks.push(RawGroundingChunk {
            web: Some(WebSource {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
        });
        self
    }

    /// Attach a chunk as-is (for exercising degenerate shapes).
    pub fn with_chunk(mut self, chunk: RawGroundingChunk) -> Self {
        self.chunks.push(chunk);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_deserialize_with_missing_fields() {
        let chunk: RawGroundingChunk = serde_json::from_str("{}").unwrap();
        assert!(chunk.web.is_none());

        let chunk: RawGroundingChunk =
            serde_json::from_str(r#"{"web": {"uri": "https://un.org"}}"#).unwrap();
        let web = chunk.web.unwrap();
        assert_eq!(web.uri.as_deref(), Some("https://un.org"));
        assert!(web.title.is_none());
    }

    #[test]
    fn test_builder_attaches_sources() {
        let answer = GroundedAnswer::new("text")
            .with_source("UN", "https://un.org")
            .with_chunk(RawGroundingChunk::default());
        assert_eq!(answer.chunks.len(), 2);
    }
}
