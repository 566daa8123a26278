//! Generative model trait — the injected client capability.
//!
//! The pipeline never talks to a provider directly. Everything it needs from
//! a model is behind this trait, so orchestrator tests run on canned doubles
//! ([`crate::testing::MockModel`]) with no network access, and provider
//! choice stays a construction-time decision of the caller.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::grounding::GroundedAnswer;

/// The two generation modes the pipeline relies on.
///
/// Implementations wrap a specific provider (the `gemini` feature ships a
/// reference one) and handle request shaping and response parsing.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Search-augmented generation.
    ///
    /// Takes a free-text instruction, returns the raw answer plus whatever
    /// grounding metadata the provider's search tool attached. A provider
    /// that declines to ground must return an empty chunk list, not an
    /// error.
    async fn generate_grounded(&self, instruction: &str) -> Result<GroundedAnswer>;

    /// Schema-constrained generation.
    ///
    /// The response is guaranteed to parse as JSON conforming to `schema`,
    /// or the call fails with [`crate::error::RetrievalError::Parse`].
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<serde_json::Value>;
}
