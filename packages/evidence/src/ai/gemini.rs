//! Gemini implementation of the GenerativeModel trait.
//!
//! A reference implementation against the Gemini REST API: the grounded
//! call attaches the provider's search tool and maps its grounding
//! metadata; the structured call pins the JSON response MIME type and
//! schema.
//!
//! # Example
//!
//! ```rust,ignore
//! use evidence::ai::Gemini;
//!
//! let model = Gemini::from_env()?.with_model("gemini-2.5-pro");
//! let retriever = Retriever::new(model);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Result, RetrievalError};
use crate::traits::model::GenerativeModel;
use crate::types::grounding::{GroundedAnswer, RawGroundingChunk};

/// Gemini-based model client.
pub struct Gemini {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl Gemini {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::from(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    ///
    /// A missing key is a `Config` error, so callers can degrade instead of
    /// crashing at startup.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| RetrievalError::Config("GEMINI_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Set the model (default: gemini-2.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, body: Value) -> Result<GenerateResponse> {
        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RetrievalError::Upstream(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Upstream(
                format!("Gemini API error {status}: {error_text}").into(),
            ));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| RetrievalError::Upstream(Box::new(e)))
    }
}

#[async_trait]
impl GenerativeModel for Gemini {
    async fn generate_grounded(&self, instruction: &str) -> Result<GroundedAnswer> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": instruction}]}],
            "tools": [{"google_search": {}}]
        });

        let response = self.generate(body).await?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::Upstream("no candidates in response".into()))?;

        // Absent grounding metadata means the provider declined to ground;
        // that degrades to an empty chunk list, not an error.
        Ok(GroundedAnswer {
            text: candidate.text(),
            chunks: candidate
                .grounding_metadata
                .map(|g| g.grounding_chunks)
                .unwrap_or_default(),
        })
    }

    async fn generate_structured(&self, prompt: &str, schema: Value) -> Result<Value> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let response = self.generate(body).await?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::Upstream("no candidates in response".into()))?;

        let value: Value = serde_json::from_str(&candidate.text())?;
        Ok(value)
    }
}

// Response types

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,

    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

impl ResponseCandidate {
    fn text(&self) -> String {
        self.content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<RawGroundingChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_builder() {
        let model = Gemini::new("test-key")
            .with_model("gemini-2.5-pro")
            .with_base_url("https://proxy.example");

        assert_eq!(model.model(), "gemini-2.5-pro");
        assert_eq!(model.base_url, "https://proxy.example");
    }

    #[test]
    fn test_response_maps_grounding_chunks() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "answer "}, {"text": "text"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://un.org/a", "title": "UN"}},
                        {"retrievedContext": {"uri": "internal"}}
                    ]
                }
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        let candidate = &response.candidates[0];
        assert_eq!(candidate.text(), "answer text");

        let metadata = candidate.grounding_metadata.as_ref().unwrap();
        assert_eq!(metadata.grounding_chunks.len(), 2);
        assert!(metadata.grounding_chunks[1].web.is_none());
    }

    #[test]
    fn test_response_without_grounding_parses() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "hi"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(response.candidates[0].grounding_metadata.is_none());
    }
}
