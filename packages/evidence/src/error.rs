//! Typed errors for the retrieval library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Two conditions are deliberately *not* errors: grounding that surfaces no
//! trusted source yields an empty result, and a citation draft with a bad
//! index is dropped inside the validator. Only upstream call failures,
//! schema mismatches, and configuration problems surface here — and the
//! orchestrator converts those into a degraded result before they reach the
//! caller.

use thiserror::Error;

/// Errors that can occur during evidence retrieval.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Upstream model call failed (network, auth, quota)
    #[error("upstream model call failed: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response did not match the expected schema
    #[error("response did not match schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error (missing credential, bad endpoint)
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;
